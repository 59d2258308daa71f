//! # Classifier Crate
//!
//! Turns a free-text food description into weighted food categories.
//!
//! ## Components
//!
//! - **classifier**: `FoodClassifier`, three additive matching passes
//!   (exact substring, whole word, fuzzy substring)
//! - **scores**: `CategoryScores`, an insertion-ordered score map
//! - **tokenizer**: word-boundary tokenization
//!
//! ## Example Usage
//!
//! ```ignore
//! use classifier::FoodClassifier;
//! use knowledge::KnowledgeBase;
//! use std::sync::Arc;
//!
//! let classifier = FoodClassifier::new(Arc::new(KnowledgeBase::builtin()?));
//! let scores = classifier.classify("grilled ribeye with garlic butter");
//! for (category, score) in scores.sorted_desc() {
//!     println!("{category}: {score:.1}");
//! }
//! ```

pub mod classifier;
pub mod scores;
pub mod tokenizer;

// Re-export main types
pub use classifier::{ClassifierConfig, FoodClassifier};
pub use scores::CategoryScores;

#[cfg(test)]
mod tests {
    use super::*;
    use knowledge::KnowledgeBase;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn builtin_classifier() -> FoodClassifier {
        FoodClassifier::new(Arc::new(KnowledgeBase::builtin().unwrap()))
    }

    #[test]
    fn test_builtin_pasta_dish() {
        let scores = builtin_classifier().classify("Spaghetti with marinara");

        assert!(scores.contains("pasta"));
        assert!(scores.contains("tomato"));
        assert!(!scores.contains("beef"));
    }

    #[test]
    fn test_builtin_unknown_text() {
        assert!(builtin_classifier().classify("xyzzy quux").is_empty());
    }

    proptest! {
        #[test]
        fn prop_classify_is_deterministic(text in "[a-z ]{0,40}") {
            let classifier = builtin_classifier();
            prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
        }

        #[test]
        fn prop_scores_are_positive(text in "[a-zA-Z ,'-]{0,40}") {
            let scores = builtin_classifier().classify(&text);
            for (_, score) in scores.iter() {
                prop_assert!(score > 0.0);
            }
        }
    }
}
