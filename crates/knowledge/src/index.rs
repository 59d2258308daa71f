//! KnowledgeBase building and validation logic.
//!
//! Turns a decoded [`KnowledgeDocument`] into a [`KnowledgeBase`]:
//! - Normalize keywords and sweet terms to lower case
//! - Convert raw rules into structured [`RuleKey`]s
//! - Build the name indices
//! - Validate that the tables agree with each other

use crate::error::{KnowledgeError, Result};
use crate::parser::{self, KnowledgeDocument};
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

impl KnowledgeBase {
    /// Build a knowledge base from JSON text
    pub fn from_json_str(json: &str, source_name: &str) -> Result<Self> {
        let document = parser::parse_document(json, source_name)?;
        Self::from_document(document)
    }

    /// Load a knowledge base from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading knowledge base from {}", path.display());
        let document = parser::read_document(path)?;
        let kb = Self::from_document(document)?;
        for wine in kb.unprofiled_wines() {
            warn!("Wine {} has no profile; it will not be annotated", wine);
        }
        Ok(kb)
    }

    /// Build and validate a knowledge base from a decoded document
    ///
    /// Steps:
    /// 1. Insert categories with lower-cased keywords
    /// 2. Convert each raw rule into a `PairingRule`
    /// 3. Insert wine profiles
    /// 4. Normalize the fallback sets
    /// 5. Validate cross-table references
    pub fn from_document(document: KnowledgeDocument) -> Result<Self> {
        let mut kb = KnowledgeBase::new();

        let mut seen = HashSet::new();
        for mut category in document.categories {
            if !seen.insert(category.name.clone()) {
                return Err(KnowledgeError::DuplicateCategory(category.name));
            }
            category.keywords = category
                .keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect();
            kb.insert_category(category);
        }

        for (position, raw) in document.pairing_rules.into_iter().enumerate() {
            let key = RuleKey::from_categories(raw.categories).ok_or_else(|| {
                KnowledgeError::ValidationError(format!(
                    "pairing rule #{} has no categories",
                    position + 1
                ))
            })?;
            kb.insert_rule(PairingRule {
                key,
                wines: raw.wines,
            });
        }

        for wine in document.wines {
            kb.insert_wine(wine);
        }

        let mut fallback = document.fallback;
        fallback.sweet_terms = fallback
            .sweet_terms
            .iter()
            .map(|t| t.to_lowercase())
            .collect();
        kb.set_fallback(fallback);

        kb.validate()?;

        let (categories, rules, wines) = kb.counts();
        debug!(
            "Knowledge base ready: {} categories, {} rules, {} wine profiles",
            categories, rules, wines
        );
        Ok(kb)
    }

    /// Validate table integrity
    ///
    /// Checks that:
    /// - Category names are non-empty and keywords are non-blank
    /// - Every rule names only declared categories, without repeats
    /// - No two rules share the same category set
    /// - Every rule lists at least one wine
    ///
    /// Wines without a profile are allowed; they are logged and simply
    /// get no characteristic annotation.
    pub fn validate(&self) -> Result<()> {
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(KnowledgeError::InvalidValue {
                    field: "category name".to_string(),
                    value: category.name.clone(),
                });
            }
            if let Some(blank) = category.keywords.iter().find(|k| k.trim().is_empty()) {
                return Err(KnowledgeError::InvalidValue {
                    field: format!("keyword of {}", category.name),
                    value: blank.clone(),
                });
            }
        }

        for (i, rule) in self.rules.iter().enumerate() {
            let mut components = HashSet::new();
            for category in rule.key.categories() {
                if !self.category_index.contains_key(category) {
                    return Err(KnowledgeError::UnknownCategory {
                        rule: rule.key.to_string(),
                        category: category.clone(),
                    });
                }
                if !components.insert(category.as_str()) {
                    return Err(KnowledgeError::ValidationError(format!(
                        "pairing rule {} repeats category {}",
                        rule.key, category
                    )));
                }
            }

            if rule.wines.is_empty() {
                return Err(KnowledgeError::ValidationError(format!(
                    "pairing rule {} lists no wines",
                    rule.key
                )));
            }

            if let Some(earlier) = self.rules[..i]
                .iter()
                .find(|other| other.key.same_categories(&rule.key))
            {
                return Err(KnowledgeError::ValidationError(format!(
                    "pairing rule {} duplicates rule {}",
                    rule.key, earlier.key
                )));
            }
        }

        Ok(())
    }

    /// Wines named by rules or fallback sets that have no profile entry,
    /// in first-mention order
    pub fn unprofiled_wines(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mentioned = self
            .rules
            .iter()
            .flat_map(|rule| rule.wines.iter())
            .chain(self.fallback.sweet_wines.iter())
            .chain(self.fallback.versatile_wines.iter())
            .chain(self.fallback.versatile_bonus.iter().map(|b| &b.wine));

        mentioned
            .map(String::as_str)
            .filter(|name| !self.wine_index.contains_key(*name))
            .filter(|name| seen.insert(*name))
            .collect()
    }
}
