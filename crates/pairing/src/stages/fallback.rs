//! Fallback stage for text that matched no pairing rule.
//!
//! Guarantees a non-empty recommendation list: sweet-sounding food gets
//! the sweet wine set, anything else the versatile set.

use crate::board::WineScoreBoard;
use crate::traits::{PairingRequest, ScoringStage};
use knowledge::KnowledgeBase;
use std::sync::Arc;

/// Score credited to each fallback wine
const FALLBACK_SCORE: f64 = 1.0;

/// Credits default wines when no earlier stage produced a positive score.
///
/// ## Algorithm
/// 1. Do nothing if any wine already has a positive score
/// 2. If the lower-cased text contains a sweet term, credit each sweet wine
/// 3. Otherwise credit each versatile wine, then apply every versatile
///    bonus entry (Pinot Noir and Chardonnay with the built-in tables).
///    The bonus is applied even though those wines are in the versatile
///    set already, so they end up at 1.8.
pub struct FallbackStage {
    knowledge: Arc<KnowledgeBase>,
}

impl FallbackStage {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    fn is_sweet(&self, food_text: &str) -> bool {
        let lowered = food_text.to_lowercase();
        self.knowledge
            .fallback()
            .sweet_terms
            .iter()
            .any(|term| lowered.contains(term.as_str()))
    }
}

impl ScoringStage for FallbackStage {
    fn name(&self) -> &str {
        "FallbackStage"
    }

    fn apply(&self, board: &mut WineScoreBoard, request: &PairingRequest<'_>) {
        if board.has_positive() {
            return;
        }

        let fallback = self.knowledge.fallback();
        if self.is_sweet(request.food_text) {
            tracing::debug!("No rule matched; using sweet fallback");
            let explanation = format!("A good match for sweet foods like {}", request.food_text);
            for wine in &fallback.sweet_wines {
                board.credit(wine, FALLBACK_SCORE, explanation.clone());
            }
        } else {
            tracing::debug!("No rule matched; using versatile fallback");
            let explanation = format!(
                "A versatile wine that pairs with many foods including {}",
                request.food_text
            );
            for wine in &fallback.versatile_wines {
                board.credit(wine, FALLBACK_SCORE, explanation.clone());
            }
            for bonus in &fallback.versatile_bonus {
                board.credit(&bonus.wine, bonus.score, bonus.explanation.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier::CategoryScores;
    use knowledge::{BonusWine, FallbackSets};

    fn create_test_knowledge() -> Arc<KnowledgeBase> {
        let mut kb = KnowledgeBase::new();
        kb.set_fallback(FallbackSets {
            sweet_terms: vec!["cake".to_string(), "ice cream".to_string()],
            sweet_wines: vec!["Dessert Wine".to_string()],
            versatile_wines: vec!["Pinot Noir".to_string(), "Rosé".to_string()],
            versatile_bonus: vec![BonusWine {
                wine: "Pinot Noir".to_string(),
                score: 0.8,
                explanation: "A versatile red that pairs with many foods".to_string(),
            }],
        });
        Arc::new(kb)
    }

    fn run(food_text: &str, board: &mut WineScoreBoard) {
        let categories = CategoryScores::new();
        let request = PairingRequest {
            categories: &categories,
            food_text,
        };
        FallbackStage::new(create_test_knowledge()).apply(board, &request);
    }

    #[test]
    fn test_sweet_fallback() {
        let mut board = WineScoreBoard::new();
        run("Vanilla ICE CREAM", &mut board);

        assert_eq!(board.len(), 1);
        assert_eq!(board.score("Dessert Wine"), Some(1.0));
        assert_eq!(
            board.get("Dessert Wine").unwrap().explanations,
            vec!["A good match for sweet foods like Vanilla ICE CREAM"]
        );
    }

    #[test]
    fn test_versatile_fallback_applies_bonus_to_listed_wine() {
        let mut board = WineScoreBoard::new();
        run("xyzzy", &mut board);

        // Pinot Noir is already versatile and still gets the bonus
        assert!((board.score("Pinot Noir").unwrap() - 1.8).abs() < 1e-9);
        assert_eq!(board.score("Rosé"), Some(1.0));
        assert_eq!(board.get("Pinot Noir").unwrap().explanations.len(), 2);
    }

    #[test]
    fn test_skipped_when_a_rule_already_scored() {
        let mut board = WineScoreBoard::new();
        board.credit("Merlot", 1.0, "Pairs well with pizza");
        run("cake", &mut board);

        assert_eq!(board.len(), 1);
    }
}
