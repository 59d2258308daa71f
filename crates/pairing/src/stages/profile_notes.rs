//! Annotation stage adding each wine's character to its explanations.

use crate::board::WineScoreBoard;
use crate::traits::{PairingRequest, ScoringStage};
use knowledge::KnowledgeBase;
use std::sync::Arc;

/// Appends a profile summary fragment to every positively scored wine.
///
/// Wines without a profile are left untouched.
pub struct ProfileNoteStage {
    knowledge: Arc<KnowledgeBase>,
}

impl ProfileNoteStage {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

impl ScoringStage for ProfileNoteStage {
    fn name(&self) -> &str {
        "ProfileNoteStage"
    }

    fn apply(&self, board: &mut WineScoreBoard, _request: &PairingRequest<'_>) {
        for entry in board.iter_mut().filter(|entry| entry.score > 0.0) {
            if let Some(profile) = self.knowledge.wine_profile(&entry.wine) {
                entry.explanations.push(profile.summary());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier::CategoryScores;
    use knowledge::WineProfile;

    fn merlot() -> WineProfile {
        WineProfile {
            name: "Merlot".to_string(),
            body: "medium-full".to_string(),
            tannins: "medium".to_string(),
            acidity: "medium".to_string(),
            flavors: vec!["plum".into(), "black cherry".into(), "chocolate".into()],
            pairings: vec!["pizza".into()],
            characteristics: vec!["smooth".into(), "approachable".into()],
        }
    }

    #[test]
    fn test_annotates_profiled_wines_only() {
        let mut kb = KnowledgeBase::new();
        kb.insert_wine(merlot());
        let stage = ProfileNoteStage::new(Arc::new(kb));

        let mut board = WineScoreBoard::new();
        board.credit("Merlot", 1.0, "Pairs well with pizza");
        board.credit("Vermentino", 1.0, "Pairs well with pesto");

        let categories = CategoryScores::new();
        let request = PairingRequest {
            categories: &categories,
            food_text: "pizza",
        };
        stage.apply(&mut board, &request);

        assert_eq!(
            board.get("Merlot").unwrap().explanations[1],
            "A medium-full-bodied smooth, approachable wine with plum, black cherry notes"
        );
        assert_eq!(board.get("Vermentino").unwrap().explanations.len(), 1);
    }
}
