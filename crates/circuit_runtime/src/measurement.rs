// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Measurement Outcomes
// =============================================================================
// Table of Contents:
//   1. MeasurementOutcomeDistribution - Bit-string occurrence counts
// =============================================================================
// Purpose: The measurement-outcome distribution an execution backend returns
//          for one circuit execution: bit-string keys (char index 0 = input
//          wire 0's measured value) mapped to non-negative counts summing to
//          the backend's shot count.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// 1. MeasurementOutcomeDistribution - Bit-string occurrence counts
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementOutcomeDistribution {
    outcome_counts: HashMap<String, usize>,
}

impl MeasurementOutcomeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(outcome_counts: HashMap<String, usize>) -> Self {
        Self { outcome_counts }
    }

    pub fn record_outcome(&mut self, bitstring: impl Into<String>) {
        *self.outcome_counts.entry(bitstring.into()).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.outcome_counts.is_empty()
    }

    pub fn distinct_outcome_count(&self) -> usize {
        self.outcome_counts.len()
    }

    pub fn total_shots(&self) -> usize {
        self.outcome_counts.values().sum()
    }

    pub fn contains_outcome(&self, bitstring: &str) -> bool {
        self.outcome_counts.contains_key(bitstring)
    }

    pub fn count_of(&self, bitstring: &str) -> usize {
        *self.outcome_counts.get(bitstring).unwrap_or(&0)
    }

    pub fn probability_of(&self, bitstring: &str) -> f64 {
        let total = self.total_shots();
        if total == 0 {
            return 0.0;
        }
        self.count_of(bitstring) as f64 / total as f64
    }

    pub fn most_frequent_outcome(&self) -> Option<(&str, usize)> {
        self.outcome_counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
    }

    pub fn outcome_counts(&self) -> &HashMap<String, usize> {
        &self.outcome_counts
    }

    /// Outcomes sorted by descending count, ties broken by bit-string, for
    /// stable display.
    pub fn sorted_outcomes(&self) -> Vec<(&str, usize)> {
        let mut outcomes: Vec<(&str, usize)> = self
            .outcome_counts
            .iter()
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
            .collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut distribution = MeasurementOutcomeDistribution::new();
        distribution.record_outcome("00");
        distribution.record_outcome("00");
        distribution.record_outcome("11");

        assert_eq!(distribution.total_shots(), 3);
        assert_eq!(distribution.count_of("00"), 2);
        assert_eq!(distribution.count_of("01"), 0);
        assert!(distribution.contains_outcome("11"));
        assert!((distribution.probability_of("00") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_most_frequent_outcome() {
        let mut distribution = MeasurementOutcomeDistribution::new();
        distribution.record_outcome("10");
        distribution.record_outcome("10");
        distribution.record_outcome("01");

        assert_eq!(distribution.most_frequent_outcome(), Some(("10", 2)));
    }

    #[test]
    fn test_empty_distribution() {
        let distribution = MeasurementOutcomeDistribution::new();
        assert!(distribution.is_empty());
        assert_eq!(distribution.total_shots(), 0);
        assert_eq!(distribution.probability_of("0"), 0.0);
        assert_eq!(distribution.most_frequent_outcome(), None);
    }

    #[test]
    fn test_sorted_outcomes_are_stable() {
        let mut distribution = MeasurementOutcomeDistribution::new();
        distribution.record_outcome("01");
        distribution.record_outcome("10");
        distribution.record_outcome("11");
        distribution.record_outcome("11");

        assert_eq!(
            distribution.sorted_outcomes(),
            vec![("11", 2), ("01", 1), ("10", 1)]
        );
    }
}
