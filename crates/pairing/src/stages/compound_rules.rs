//! Stage crediting wines of compound ("A + B") pairing rules.
//!
//! Compound rules capture combinations such as pasta with tomato sauce,
//! which call for different wines than either category alone.

use crate::board::WineScoreBoard;
use crate::traits::{PairingRequest, ScoringStage};
use knowledge::KnowledgeBase;
use std::sync::Arc;

/// Fires every compound rule whose categories were all detected.
///
/// ## Algorithm
/// For each compound rule, in table order:
/// 1. Skip unless every component category is present
/// 2. match_score = sum of the component scores
/// 3. Credit match_score to each wine of the rule
pub struct CompoundRuleStage {
    knowledge: Arc<KnowledgeBase>,
}

impl CompoundRuleStage {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

impl ScoringStage for CompoundRuleStage {
    fn name(&self) -> &str {
        "CompoundRuleStage"
    }

    fn apply(&self, board: &mut WineScoreBoard, request: &PairingRequest<'_>) {
        for rule in self.knowledge.compound_rules() {
            let components = rule.key.categories();
            let match_score: Option<f64> = components
                .iter()
                .map(|category| request.categories.get(category))
                .sum();

            // `None` when any component is missing
            let Some(match_score) = match_score else {
                continue;
            };

            tracing::debug!("Compound rule {} matched with score {:.2}", rule.key, match_score);
            let explanation = format!("Perfect for {} combinations", rule.key);
            for wine in &rule.wines {
                board.credit(wine, match_score, explanation.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier::CategoryScores;
    use knowledge::{FoodCategory, PairingRule};

    fn create_test_knowledge() -> Arc<KnowledgeBase> {
        let mut kb = KnowledgeBase::new();
        kb.insert_category(FoodCategory::new("pasta", &["pasta"]));
        kb.insert_category(FoodCategory::new("tomato", &["tomato"]));
        kb.insert_category(FoodCategory::new("cream", &["cream"]));
        kb.insert_rule(PairingRule::compound(&["pasta", "tomato"], &["Sangiovese", "Barbera"]));
        kb.insert_rule(PairingRule::compound(&["pasta", "cream"], &["Chardonnay"]));
        kb.insert_rule(PairingRule::single("pasta", &["Merlot"]));
        Arc::new(kb)
    }

    #[test]
    fn test_compound_rule_fires_when_all_present() {
        let stage = CompoundRuleStage::new(create_test_knowledge());
        let categories: CategoryScores = [("tomato", 1.5), ("pasta", 2.0)].into_iter().collect();
        let request = PairingRequest {
            categories: &categories,
            food_text: "pasta with tomato",
        };

        let mut board = WineScoreBoard::new();
        stage.apply(&mut board, &request);

        assert_eq!(board.score("Sangiovese"), Some(3.5));
        assert_eq!(board.score("Barbera"), Some(3.5));
        assert!(board.get("Chardonnay").is_none());
        // single rules belong to another stage
        assert!(board.get("Merlot").is_none());
        assert_eq!(
            board.get("Sangiovese").unwrap().explanations,
            vec!["Perfect for pasta + tomato combinations"]
        );
    }

    #[test]
    fn test_compound_rule_needs_every_component() {
        let stage = CompoundRuleStage::new(create_test_knowledge());
        let categories: CategoryScores = [("pasta", 2.0)].into_iter().collect();
        let request = PairingRequest {
            categories: &categories,
            food_text: "pasta",
        };

        let mut board = WineScoreBoard::new();
        stage.apply(&mut board, &request);
        assert!(board.is_empty());
    }
}
