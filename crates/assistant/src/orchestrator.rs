//! # Pairing Orchestrator
//!
//! Coordinates one pairing request:
//! 1. Normalize the food description
//! 2. Classify it into food categories
//! 3. Score and rank wines from those categories
//! 4. Return the categories and recommendations together

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use classifier::{CategoryScores, ClassifierConfig, FoodClassifier};
use knowledge::{KnowledgeBase, WineProfile};
use pairing::{Recommendation, Recommender, RecommenderConfig};

/// Result of one pairing request
#[derive(Debug, Clone, Serialize)]
pub struct PairingReport {
    /// The trimmed food description
    pub food: String,
    /// Every detected category with its confidence
    pub categories: CategoryScores,
    /// Ranked wines, best first
    pub recommendations: Vec<Recommendation>,
}

/// Main orchestrator wiring the classifier to the recommender.
///
/// Cheap to clone; all clones share the same read-only tables.
#[derive(Clone)]
pub struct PairingAssistant {
    knowledge: Arc<KnowledgeBase>,
    classifier: FoodClassifier,
    recommender: Arc<Recommender>,
}

impl PairingAssistant {
    /// Create an assistant with default classifier and recommender settings
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_config(knowledge, ClassifierConfig::default(), RecommenderConfig::default())
    }

    pub fn with_config(
        knowledge: Arc<KnowledgeBase>,
        classifier_config: ClassifierConfig,
        recommender_config: RecommenderConfig,
    ) -> Self {
        let classifier = FoodClassifier::with_config(knowledge.clone(), classifier_config);
        let recommender = Arc::new(Recommender::with_config(knowledge.clone(), recommender_config));
        Self {
            knowledge,
            classifier,
            recommender,
        }
    }

    /// Load the knowledge base from `path`, or the built-in one when `None`
    pub fn load_knowledge(path: Option<&Path>) -> Result<Arc<KnowledgeBase>> {
        let kb = match path {
            Some(path) => KnowledgeBase::load_from_file(path)
                .with_context(|| format!("Failed to load knowledge base from {}", path.display()))?,
            None => KnowledgeBase::builtin().context("Failed to load built-in knowledge base")?,
        };
        let (categories, rules, wines) = kb.counts();
        info!(
            "Knowledge base loaded: {} categories, {} rules, {} wines",
            categories, rules, wines
        );
        Ok(Arc::new(kb))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn wine_profile(&self, wine: &str) -> Option<&WineProfile> {
        self.knowledge.wine_profile(wine)
    }

    /// Main entry point: pair a food description with wines
    pub fn pair(&self, food: &str) -> PairingReport {
        let start_time = Instant::now();
        let food = food.trim();

        let categories = self.classifier.classify(food);
        debug!("Detected {} categories for {:?}", categories.len(), food);

        let recommendations = self.recommender.recommend(&categories, food);
        info!(
            "Paired {:?} with {} wines in {:?}",
            food,
            recommendations.len(),
            start_time.elapsed()
        );

        PairingReport {
            food: food.to_string(),
            categories,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knowledge::{FoodCategory, PairingRule};

    fn build_test_assistant() -> PairingAssistant {
        let mut kb = KnowledgeBase::new();
        kb.insert_category(FoodCategory::new("pizza", &["pizza", "calzone"]));
        kb.insert_rule(PairingRule::single("pizza", &["Sangiovese", "Barbera", "Zinfandel"]));
        PairingAssistant::new(Arc::new(kb))
    }

    #[test]
    fn test_pair_trims_input() {
        let assistant = build_test_assistant();
        let report = assistant.pair("  Pizza night  ");

        assert_eq!(report.food, "Pizza night");
        assert!(report.categories.contains("pizza"));
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.recommendations[0].wine, "Sangiovese");
    }

    #[test]
    fn test_limit_is_respected() {
        let mut kb = KnowledgeBase::new();
        kb.insert_category(FoodCategory::new("pizza", &["pizza"]));
        kb.insert_rule(PairingRule::single("pizza", &["Sangiovese", "Barbera", "Zinfandel"]));
        let config = RecommenderConfig {
            max_results: 2,
            ..RecommenderConfig::default()
        };
        let assistant = PairingAssistant::with_config(Arc::new(kb), ClassifierConfig::default(), config);

        assert_eq!(assistant.pair("pizza").recommendations.len(), 2);
    }

    #[test]
    fn test_report_serializes_in_order() {
        let assistant = build_test_assistant();
        let report = assistant.pair("calzone");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["food"], "calzone");
        assert!(json["categories"]["pizza"].as_f64().unwrap() > 0.0);
        assert_eq!(json["recommendations"][0]["wine"], "Sangiovese");
    }

    #[test]
    fn test_builtin_knowledge_loads() {
        let kb = PairingAssistant::load_knowledge(None).unwrap();
        let assistant = PairingAssistant::new(kb);

        assert!(assistant.wine_profile("Merlot").is_some());
        assert!(!assistant.pair("grilled salmon").recommendations.is_empty());
    }

    #[test]
    fn test_missing_knowledge_file_has_context() {
        let err = PairingAssistant::load_knowledge(Some(Path::new("/no/such/knowledge.json")))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to load knowledge base"));
    }
}
