//! Per-request score accumulator for candidate wines.

use std::collections::HashMap;

/// Running score and explanation fragments for one wine
#[derive(Debug, Clone, PartialEq)]
pub struct WineScore {
    pub wine: String,
    pub score: f64,
    /// Fragments in the order the stages produced them
    pub explanations: Vec<String>,
}

/// Accumulates scores per wine while the scoring stages run.
///
/// Wines keep the order in which they were first credited, which is
/// the tie-breaking order of the final ranking. A board lives for one
/// recommendation request only.
#[derive(Debug, Clone, Default)]
pub struct WineScoreBoard {
    entries: Vec<WineScore>,
    positions: HashMap<String, usize>,
}

impl WineScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `wine` and record why, inserting the wine if absent
    pub fn credit(&mut self, wine: &str, amount: f64, explanation: impl Into<String>) {
        let i = match self.positions.get(wine) {
            Some(&i) => i,
            None => {
                self.positions.insert(wine.to_string(), self.entries.len());
                self.entries.push(WineScore {
                    wine: wine.to_string(),
                    score: 0.0,
                    explanations: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[i];
        entry.score += amount;
        entry.explanations.push(explanation.into());
    }

    pub fn get(&self, wine: &str) -> Option<&WineScore> {
        self.positions.get(wine).map(|&i| &self.entries[i])
    }

    pub fn score(&self, wine: &str) -> Option<f64> {
        self.get(wine).map(|entry| entry.score)
    }

    /// True once any wine has a positive score
    pub fn has_positive(&self) -> bool {
        self.entries.iter().any(|entry| entry.score > 0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-credit order
    pub fn iter(&self) -> impl Iterator<Item = &WineScore> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WineScore> {
        self.entries.iter_mut()
    }

    pub fn into_entries(self) -> Vec<WineScore> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_accumulates_and_records() {
        let mut board = WineScoreBoard::new();
        board.credit("Merlot", 1.0, "Pairs well with pizza");
        board.credit("Malbec", 0.5, "Pairs well with beef");
        board.credit("Merlot", 2.0, "Pairs well with cheese");

        let merlot = board.get("Merlot").unwrap();
        assert_eq!(merlot.score, 3.0);
        assert_eq!(
            merlot.explanations,
            vec!["Pairs well with pizza", "Pairs well with cheese"]
        );

        let order: Vec<&str> = board.iter().map(|e| e.wine.as_str()).collect();
        assert_eq!(order, vec!["Merlot", "Malbec"]);
    }

    #[test]
    fn test_has_positive() {
        let mut board = WineScoreBoard::new();
        assert!(!board.has_positive());

        board.credit("Merlot", 0.0, "nothing");
        assert!(!board.has_positive());

        board.credit("Merlot", 0.1, "something");
        assert!(board.has_positive());
    }
}
