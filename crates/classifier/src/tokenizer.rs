//! Word tokenization for food descriptions.

/// Split lower-cased text into word tokens.
///
/// A token is a maximal run of alphanumeric characters or underscores,
/// so punctuation and whitespace both act as boundaries:
/// `"pan-fried, crispy"` -> `["pan", "fried", "crispy"]`.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Token length in characters, not bytes
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
