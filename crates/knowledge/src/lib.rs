//! # Knowledge Crate
//!
//! Static tables behind the wine pairing assistant.
//!
//! ## Main Components
//!
//! - **types**: FoodCategory, PairingRule, WineProfile, FallbackSets, KnowledgeBase
//! - **parser**: Decode JSON knowledge documents
//! - **index**: Build indices and validate the tables
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use knowledge::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin()?;
//! let merlot = kb.wine_profile("Merlot").unwrap();
//! println!("{}", merlot.summary());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{KnowledgeError, Result};
pub use types::{
    BonusWine,
    FallbackSets,
    FoodCategory,
    KnowledgeBase,
    PairingRule,
    RuleKey,
    WineProfile,
};

/// The knowledge document shipped with the crate
pub const BUILTIN_KNOWLEDGE: &str = include_str!("../data/knowledge.json");

impl KnowledgeBase {
    /// Build the knowledge base shipped with the crate
    pub fn builtin() -> Result<Self> {
        let kb = Self::from_json_str(BUILTIN_KNOWLEDGE, "builtin knowledge.json")?;
        for wine in kb.unprofiled_wines() {
            tracing::debug!("Built-in wine {} has no profile", wine);
        }
        Ok(kb)
    }
}
