//! Wine pairing recommender.
//!
//! This crate provides:
//! - ScoringStage trait and the stages that credit wines
//! - StagePipeline for composing stages
//! - Recommender for scoring and ranking
//!
//! ## Architecture
//! A recommendation request runs in stages over one WineScoreBoard:
//! 1. CompoundRuleStage fires rules such as "pasta + tomato"
//! 2. CategoryRuleStage fires each detected category's own rule
//! 3. FallbackStage supplies sweet or versatile wines if nothing scored
//! 4. ProfileNoteStage appends each wine's character summary
//!
//! The board is then ranked, explained and capped.
//!
//! ## Example Usage
//! ```ignore
//! use classifier::FoodClassifier;
//! use pairing::Recommender;
//!
//! let categories = classifier.classify("linguine with clams");
//! let recommender = Recommender::new(kb.clone());
//! for rec in recommender.recommend(&categories, "linguine with clams") {
//!     println!("{} ({:.1}): {}", rec.wine, rec.score, rec.explanation);
//! }
//! ```

pub mod board;
pub mod traits;
pub mod stages;
pub mod stage_pipeline;
pub mod recommender;

// Re-export main types
pub use board::{WineScore, WineScoreBoard};
pub use traits::{PairingRequest, ScoringStage};
pub use stage_pipeline::StagePipeline;
pub use recommender::{rank, Recommendation, Recommender, RecommenderConfig};
