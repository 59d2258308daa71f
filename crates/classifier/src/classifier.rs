//! Keyword classifier turning food text into category scores.

use crate::scores::CategoryScores;
use crate::tokenizer::{char_len, tokenize};
use knowledge::KnowledgeBase;
use std::sync::Arc;
use tracing::debug;

/// Weights for the three matching passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Keyword found anywhere in the text
    pub exact_weight: f64,
    /// Keyword equal to one of the word tokens
    pub word_weight: f64,
    /// Token contained in a keyword, or keyword contained in a token
    pub fuzzy_weight: f64,
    /// Shortest token (in characters) that may take part in fuzzy matching
    pub fuzzy_min_token_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            exact_weight: 1.0,
            word_weight: 0.9,
            fuzzy_weight: 0.5,
            fuzzy_min_token_len: 4,
        }
    }
}

/// Maps free-text food descriptions onto the knowledge base categories.
///
/// ## Algorithm
/// Scores are strictly additive across three passes over the lower-cased text:
/// 1. Exact: every keyword occurring as a substring adds `exact_weight`
/// 2. Whole word: every keyword equal to some token adds `word_weight`
/// 3. Fuzzy: for every token of at least `fuzzy_min_token_len` characters,
///    every keyword that contains it or is contained by it adds `fuzzy_weight`
///
/// A keyword hit by both of the first two passes contributes 1.9 with the
/// default weights. In the fuzzy pass each token counts separately, and
/// several keywords of one category may fire for the same token.
#[derive(Debug, Clone)]
pub struct FoodClassifier {
    knowledge: Arc<KnowledgeBase>,
    config: ClassifierConfig,
}

impl FoodClassifier {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_config(knowledge, ClassifierConfig::default())
    }

    pub fn with_config(knowledge: Arc<KnowledgeBase>, config: ClassifierConfig) -> Self {
        Self { knowledge, config }
    }

    /// Classify `text` into category scores.
    ///
    /// Categories that never matched are absent from the result. Never fails;
    /// empty text yields an empty map.
    pub fn classify(&self, text: &str) -> CategoryScores {
        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);
        let mut scores = CategoryScores::new();

        self.exact_pass(&lowered, &mut scores);
        self.word_pass(&tokens, &mut scores);
        self.fuzzy_pass(&tokens, &mut scores);

        debug!(
            "Classified {:?}: {} tokens, {} categories",
            text,
            tokens.len(),
            scores.len()
        );
        scores
    }

    fn exact_pass(&self, lowered: &str, scores: &mut CategoryScores) {
        for category in self.knowledge.categories() {
            for keyword in &category.keywords {
                if lowered.contains(keyword.as_str()) {
                    scores.add(&category.name, self.config.exact_weight);
                }
            }
        }
    }

    fn word_pass(&self, tokens: &[&str], scores: &mut CategoryScores) {
        for category in self.knowledge.categories() {
            for keyword in &category.keywords {
                if tokens.contains(&keyword.as_str()) {
                    scores.add(&category.name, self.config.word_weight);
                }
            }
        }
    }

    fn fuzzy_pass(&self, tokens: &[&str], scores: &mut CategoryScores) {
        for token in tokens
            .iter()
            .filter(|token| char_len(token) >= self.config.fuzzy_min_token_len)
        {
            for category in self.knowledge.categories() {
                for keyword in &category.keywords {
                    if keyword.contains(token) || token.contains(keyword.as_str()) {
                        scores.add(&category.name, self.config.fuzzy_weight);
                    }
                }
            }
        }
    }
}
