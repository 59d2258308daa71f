//! Core domain types for the wine pairing knowledge base.
//!
//! This module defines the static tables consumed by the classifier and
//! the recommender:
//! - Food categories with their trigger keywords
//! - Pairing rules from one or more categories to a wine list
//! - Wine profiles used to annotate recommendations
//! - Fallback sets used when nothing in the text matches a rule

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Food Categories
// =============================================================================

/// A semantic food concept (ingredient, preparation, cuisine or flavor)
/// together with the keywords that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub name: String,
    /// Trigger keywords and phrases, stored lower-case
    pub keywords: Vec<String>,
}

impl FoodCategory {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

// =============================================================================
// Pairing Rules
// =============================================================================

/// Key of a pairing rule.
///
/// A compound key fires only when every one of its categories was
/// detected. Component order is kept for display but plays no part in
/// matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKey {
    Single(String),
    Compound(Vec<String>),
}

impl RuleKey {
    /// Build a key from a list of category names.
    ///
    /// Returns `None` for an empty list. A single-element list becomes a
    /// `Single` key.
    pub fn from_categories(mut categories: Vec<String>) -> Option<Self> {
        match categories.len() {
            0 => None,
            1 => categories.pop().map(RuleKey::Single),
            _ => Some(RuleKey::Compound(categories)),
        }
    }

    /// Category names making up this key
    pub fn categories(&self) -> &[String] {
        match self {
            RuleKey::Single(name) => std::slice::from_ref(name),
            RuleKey::Compound(names) => names,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, RuleKey::Compound(_))
    }

    /// True when both keys name the same set of categories.
    pub fn same_categories(&self, other: &RuleKey) -> bool {
        let mut ours: Vec<&str> = self.categories().iter().map(String::as_str).collect();
        let mut theirs: Vec<&str> = other.categories().iter().map(String::as_str).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

impl fmt::Display for RuleKey {
    /// Renders compound keys as "pasta + tomato"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.categories().join(" + "))
    }
}

/// Static association from a rule key to an ordered list of wines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingRule {
    pub key: RuleKey,
    pub wines: Vec<String>,
}

impl PairingRule {
    pub fn single(category: impl Into<String>, wines: &[&str]) -> Self {
        Self {
            key: RuleKey::Single(category.into()),
            wines: wines.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn compound(categories: &[&str], wines: &[&str]) -> Self {
        Self {
            key: RuleKey::Compound(categories.iter().map(|c| c.to_string()).collect()),
            wines: wines.iter().map(|w| w.to_string()).collect(),
        }
    }
}

// =============================================================================
// Wine Profiles
// =============================================================================

/// Descriptive attributes of a wine.
///
/// `pairings` is display-only and never used in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineProfile {
    pub name: String,
    /// light / light-medium / medium / medium-full / full
    pub body: String,
    pub tannins: String,
    pub acidity: String,
    pub flavors: Vec<String>,
    #[serde(default)]
    pub pairings: Vec<String>,
    /// Style adjectives such as "robust" or "crisp"
    pub characteristics: Vec<String>,
}

impl WineProfile {
    /// One-line summary used as an explanation fragment:
    /// "A full-bodied robust, structured wine with black currant, black cherry notes"
    pub fn summary(&self) -> String {
        let flavors = self
            .flavors
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "A {}-bodied {} wine with {} notes",
            self.body,
            self.characteristics.join(", "),
            flavors
        )
    }
}

// =============================================================================
// Fallback Sets
// =============================================================================

/// Extra score granted to a wine whenever the versatile fallback fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusWine {
    pub wine: String,
    pub score: f64,
    pub explanation: String,
}

/// Fixed wine sets used when no pairing rule produced a positive score
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FallbackSets {
    /// Terms that mark a food as sweet (substring match, lower-case)
    pub sweet_terms: Vec<String>,
    pub sweet_wines: Vec<String>,
    pub versatile_wines: Vec<String>,
    /// Applied unconditionally after the versatile set, even for wines
    /// already in it
    #[serde(default)]
    pub versatile_bonus: Vec<BonusWine>,
}

// =============================================================================
// KnowledgeBase
// =============================================================================

/// All static tables, in declaration order, with name indices.
///
/// Built once and shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub(crate) categories: Vec<FoodCategory>,
    pub(crate) rules: Vec<PairingRule>,
    pub(crate) wines: Vec<WineProfile>,
    pub(crate) fallback: FallbackSets,

    /// Category name -> position in `categories`
    pub(crate) category_index: HashMap<String, usize>,
    /// Wine name -> position in `wines`
    pub(crate) wine_index: HashMap<String, usize>,
    /// Category name -> position in `rules` of its single-category rule
    pub(crate) single_rule_index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Creates a new, empty KnowledgeBase
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[FoodCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&FoodCategory> {
        self.category_index.get(name).map(|&i| &self.categories[i])
    }

    pub fn rules(&self) -> &[PairingRule] {
        &self.rules
    }

    /// Compound rules in declaration order
    pub fn compound_rules(&self) -> impl Iterator<Item = &PairingRule> {
        self.rules.iter().filter(|rule| rule.key.is_compound())
    }

    /// Wines of the single-category rule for `category`
    ///
    /// Returns an empty slice if the category has no rule of its own
    pub fn single_rule_wines(&self, category: &str) -> &[String] {
        self.single_rule_index
            .get(category)
            .map(|&i| self.rules[i].wines.as_slice())
            .unwrap_or(&[])
    }

    pub fn wine_profile(&self, name: &str) -> Option<&WineProfile> {
        self.wine_index.get(name).map(|&i| &self.wines[i])
    }

    pub fn fallback(&self) -> &FallbackSets {
        &self.fallback
    }

    // Mutators - used while building a knowledge base

    /// Insert a category, replacing any earlier one with the same name
    pub fn insert_category(&mut self, category: FoodCategory) {
        match self.category_index.get(&category.name) {
            Some(&i) => self.categories[i] = category,
            None => {
                self.category_index
                    .insert(category.name.clone(), self.categories.len());
                self.categories.push(category);
            }
        }
    }

    /// Insert a pairing rule at the end of the rule table
    pub fn insert_rule(&mut self, rule: PairingRule) {
        if let RuleKey::Single(name) = &rule.key {
            self.single_rule_index
                .entry(name.clone())
                .or_insert(self.rules.len());
        }
        self.rules.push(rule);
    }

    /// Insert a wine profile, replacing any earlier one with the same name
    pub fn insert_wine(&mut self, wine: WineProfile) {
        match self.wine_index.get(&wine.name) {
            Some(&i) => self.wines[i] = wine,
            None => {
                self.wine_index.insert(wine.name.clone(), self.wines.len());
                self.wines.push(wine);
            }
        }
    }

    pub fn set_fallback(&mut self, fallback: FallbackSets) {
        self.fallback = fallback;
    }

    /// Get counts for debugging/validation: (categories, rules, wines)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.categories.len(), self.rules.len(), self.wines.len())
    }
}
