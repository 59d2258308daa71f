//! The StagePipeline runs scoring stages in order.

use crate::board::WineScoreBoard;
use crate::traits::{PairingRequest, ScoringStage};

/// Chains scoring stages into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = StagePipeline::new()
///     .add_stage(CompoundRuleStage::new(kb.clone()))
///     .add_stage(CategoryRuleStage::new(kb.clone()))
///     .add_stage(FallbackStage::new(kb.clone()))
///     .add_stage(ProfileNoteStage::new(kb.clone()));
///
/// let board = pipeline.run(&request);
/// ```
pub struct StagePipeline {
    stages: Vec<Box<dyn ScoringStage>>,
}

impl StagePipeline {
    /// Create a new empty StagePipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl ScoringStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in sequence on a fresh board.
    pub fn run(&self, request: &PairingRequest<'_>) -> WineScoreBoard {
        let mut board = WineScoreBoard::new();
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (wines on board: {})",
                stage.name(),
                board.len()
            );
            stage.apply(&mut board, request);
            tracing::debug!(
                "Stage applied: {} (wines on board: {})",
                stage.name(),
                board.len()
            );
        }
        board
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::new()
    }
}
