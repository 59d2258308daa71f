//! Wine recommender: scoring stages followed by ranking.

use crate::board::{WineScore, WineScoreBoard};
use crate::stage_pipeline::StagePipeline;
use crate::stages::{CategoryRuleStage, CompoundRuleStage, FallbackStage, ProfileNoteStage};
use crate::traits::PairingRequest;
use classifier::CategoryScores;
use knowledge::KnowledgeBase;
use serde::Serialize;
use std::sync::Arc;

/// A ranked wine with its final score and explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub wine: String,
    pub score: f64,
    pub explanation: String,
}

/// Limits applied while ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Maximum number of recommendations returned
    pub max_results: usize,
    /// Number of explanation fragments joined into the final explanation
    pub explanation_fragments: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            explanation_fragments: 2,
        }
    }
}

/// Turns category scores into a ranked, explained list of wines.
///
/// The stage order is fixed: compound rules, single-category rules,
/// fallback, profile notes.
pub struct Recommender {
    pipeline: StagePipeline,
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_config(knowledge, RecommenderConfig::default())
    }

    pub fn with_config(knowledge: Arc<KnowledgeBase>, config: RecommenderConfig) -> Self {
        let pipeline = StagePipeline::new()
            .add_stage(CompoundRuleStage::new(knowledge.clone()))
            .add_stage(CategoryRuleStage::new(knowledge.clone()))
            .add_stage(FallbackStage::new(knowledge.clone()))
            .add_stage(ProfileNoteStage::new(knowledge));
        Self { pipeline, config }
    }

    /// Run the scoring stages and return the board before ranking.
    ///
    /// Categories without a positive score are treated as absent.
    pub fn score_board(&self, categories: &CategoryScores, food_text: &str) -> WineScoreBoard {
        let detected = categories.positive();
        let request = PairingRequest {
            categories: &detected,
            food_text,
        };
        self.pipeline.run(&request)
    }

    /// Recommend at most `max_results` wines, best first.
    pub fn recommend(&self, categories: &CategoryScores, food_text: &str) -> Vec<Recommendation> {
        let board = self.score_board(categories, food_text);
        rank(board, &self.config)
    }
}

/// Rank a finished board.
///
/// ## Algorithm
/// 1. Stable sort by descending score, so ties keep first-credit order
/// 2. Drop wines without a positive score
/// 3. Build each explanation from the shortest fragments (by character
///    count, stable on equal lengths) joined with a single space
/// 4. Keep the first `max_results`
pub fn rank(board: WineScoreBoard, config: &RecommenderConfig) -> Vec<Recommendation> {
    let mut entries = board.into_entries();
    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    entries
        .into_iter()
        .filter(|entry| entry.score > 0.0)
        .take(config.max_results)
        .map(|entry| {
            let explanation = compose_explanation(&entry, config.explanation_fragments);
            Recommendation {
                wine: entry.wine,
                score: entry.score,
                explanation,
            }
        })
        .collect()
}

fn compose_explanation(entry: &WineScore, fragments: usize) -> String {
    let mut shortest: Vec<&str> = entry.explanations.iter().map(String::as_str).collect();
    shortest.sort_by_key(|fragment| fragment.chars().count());
    shortest.truncate(fragments);
    shortest.join(" ")
}
