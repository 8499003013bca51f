// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Outcome Classification
// =============================================================================
// Table of Contents:
//   1. OracleVerdict - Terminal pipeline value
//   2. classify_outcome_distribution - Decision rule
// =============================================================================
// Purpose: Maps a measurement-outcome distribution back to the oracle's
//          classical type. Under ideal execution a constant oracle yields the
//          all-zero string with certainty and a balanced oracle with
//          probability exactly zero, so presence of that single key is a
//          lossless decision statistic.
// =============================================================================

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::measurement::MeasurementOutcomeDistribution;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// 1. OracleVerdict - Terminal pipeline value
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleVerdict {
    Constant,
    Balanced,
}

impl fmt::Display for OracleVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "Constant"),
            Self::Balanced => write!(f, "Balanced"),
        }
    }
}

// =============================================================================
// 2. classify_outcome_distribution - Decision rule
// =============================================================================

/// Constant if the all-zero n-bit string is a key in the distribution,
/// regardless of its count or of whatever other keys are present; Balanced
/// otherwise. The rule checks presence only and applies no statistical
/// threshold, so a noisy backend that puts even one stray count on the
/// all-zero key flips the verdict to Constant.
pub fn classify_outcome_distribution(
    input_count: usize,
    outcomes: &MeasurementOutcomeDistribution,
) -> AlgorithmResult<OracleVerdict> {
    if input_count < 1 {
        return Err(AlgorithmError::invalid_argument(
            "classification requires at least 1 input wire",
        ));
    }
    if outcomes.is_empty() {
        return Err(AlgorithmError::invalid_argument(
            "outcome distribution is empty; the backend reported zero executions",
        ));
    }

    let all_zero = "0".repeat(input_count);
    let verdict = if outcomes.contains_outcome(&all_zero) {
        OracleVerdict::Constant
    } else {
        OracleVerdict::Balanced
    };
    tracing::debug!(input_count, %verdict, "classified outcome distribution");
    Ok(verdict)
}
