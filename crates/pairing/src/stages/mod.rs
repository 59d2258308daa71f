//! Scoring stage implementations for the recommender.
//!
//! This module contains the concrete stages that
//! `Recommender::new` composes into a StagePipeline, in this order.

pub mod compound_rules;
pub mod category_rules;
pub mod fallback;
pub mod profile_notes;

// Re-export for convenience
pub use category_rules::CategoryRuleStage;
pub use compound_rules::CompoundRuleStage;
pub use fallback::FallbackStage;
pub use profile_notes::ProfileNoteStage;
