//! Parser for knowledge base documents.
//!
//! A knowledge document is a JSON object with four members:
//! - `categories`: `[{"name": "pasta", "keywords": ["pasta", "penne", ...]}]`
//! - `pairing_rules`: `[{"categories": ["pasta", "tomato"], "wines": [...]}]`
//! - `wines`: `[{"name": "Merlot", "body": "medium-full", ...}]`
//! - `fallback`: sweet terms plus the sweet and versatile wine sets
//!
//! Every table is an array so declaration order survives decoding; the
//! recommender's tie-breaking depends on it.

use crate::error::{KnowledgeError, Result};
use crate::types::{FallbackSets, FoodCategory, WineProfile};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A decoded but not yet validated knowledge document
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeDocument {
    pub categories: Vec<FoodCategory>,
    pub pairing_rules: Vec<RawRule>,
    #[serde(default)]
    pub wines: Vec<WineProfile>,
    #[serde(default)]
    pub fallback: FallbackSets,
}

/// A pairing rule as written in the document
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    pub categories: Vec<String>,
    pub wines: Vec<String>,
}

/// Decode a knowledge document from JSON text
///
/// `source_name` is only used in error messages.
pub fn parse_document(json: &str, source_name: &str) -> Result<KnowledgeDocument> {
    serde_json::from_str(json).map_err(|e| KnowledgeError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Read and decode a knowledge document from disk
pub fn read_document(path: &Path) -> Result<KnowledgeDocument> {
    if !path.exists() {
        return Err(KnowledgeError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let json = fs::read_to_string(path)?;
    parse_document(&json, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let json = r#"{
            "categories": [{"name": "pasta", "keywords": ["pasta", "penne"]}],
            "pairing_rules": [{"categories": ["pasta"], "wines": ["Barbera"]}]
        }"#;

        let doc = parse_document(json, "inline").unwrap();
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.categories[0].keywords, vec!["pasta", "penne"]);
        assert_eq!(doc.pairing_rules[0].wines, vec!["Barbera"]);
        assert!(doc.wines.is_empty());
        assert!(doc.fallback.sweet_terms.is_empty());
    }

    #[test]
    fn test_parse_reports_source_name() {
        let err = parse_document("{ not json", "broken.json").unwrap_err();
        match err {
            KnowledgeError::ParseError { source_name, .. } => {
                assert_eq!(source_name, "broken.json")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, KnowledgeError::FileNotFound { .. }));
    }
}
