//! Core traits for the scoring pipeline.
//!
//! This module defines the ScoringStage trait that lets each part of the
//! pairing logic (rule matching, fallback, annotation) be composed into a
//! StagePipeline.

use crate::board::WineScoreBoard;
use classifier::CategoryScores;

/// Input shared by every stage of one recommendation request
#[derive(Debug, Clone, Copy)]
pub struct PairingRequest<'a> {
    /// Detected categories, positive scores only
    pub categories: &'a CategoryScores,
    /// The food description as the user wrote it
    pub food_text: &'a str,
}

/// Core trait for scoring stages.
///
/// ## Design Note
/// - `Send + Sync` allows one recommender to serve concurrent callers
/// - Stages only ever touch the board they are given
/// - Stages never fail; every input has a well-defined outcome
pub trait ScoringStage: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Credit wines on `board` for this request
    fn apply(&self, board: &mut WineScoreBoard, request: &PairingRequest<'_>);
}
