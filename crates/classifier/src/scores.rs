//! Category confidence scores produced by the classifier.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Mapping from category name to accumulated confidence.
///
/// Entries keep the order in which a category was first touched. The
/// recommender relies on that order to break ties between equally
/// scored categories deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryScores {
    entries: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, inserting it at zero first if absent
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.positions.get(category) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.positions
                    .insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.positions.get(category).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.positions.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-touch order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Entries sorted by descending score.
    ///
    /// The sort is stable, so ties keep first-touch order.
    pub fn sorted_desc(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<(&str, f64)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }

    /// Copy of this map without entries whose score is not positive
    pub fn positive(&self) -> Self {
        let mut filtered = Self::new();
        for (name, score) in self.iter().filter(|(_, score)| *score > 0.0) {
            filtered.add(name, score);
        }
        filtered
    }
}

impl<'a> FromIterator<(&'a str, f64)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (name, score) in iter {
            scores.add(name, score);
        }
        scores
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}
