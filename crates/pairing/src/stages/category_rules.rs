//! Stage crediting wines of single-category pairing rules.

use crate::board::WineScoreBoard;
use crate::traits::{PairingRequest, ScoringStage};
use knowledge::KnowledgeBase;
use std::sync::Arc;

/// Credits each detected category's own rule, strongest category first.
///
/// ## Algorithm
/// 1. Sort detected categories by descending score (stable on ties)
/// 2. For each category with a single-category rule, credit its score
///    to every wine of that rule
pub struct CategoryRuleStage {
    knowledge: Arc<KnowledgeBase>,
}

impl CategoryRuleStage {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

impl ScoringStage for CategoryRuleStage {
    fn name(&self) -> &str {
        "CategoryRuleStage"
    }

    fn apply(&self, board: &mut WineScoreBoard, request: &PairingRequest<'_>) {
        for (category, score) in request.categories.sorted_desc() {
            let wines = self.knowledge.single_rule_wines(category);
            if wines.is_empty() {
                continue;
            }
            let explanation = format!("Pairs well with {}", category);
            for wine in wines {
                board.credit(wine, score, explanation.clone());
            }
        }
    }
}
