// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Oracle Synthesis
// =============================================================================
// Table of Contents:
//   1. OracleFunctionKind - Constant / Balanced tag
//   2. BlackBoxOracle - Reversible oracle over n+1 wires
//   3. Synthesizers - Random constant / balanced construction
// =============================================================================
// Purpose: Deterministically encodes a constant or balanced boolean function
//          into a reversible gate sequence over n input wires plus one
//          output/ancilla wire. Randomness is injected through a rand::Rng so
//          callers and tests control the coin and the mask draw.
// =============================================================================

use crate::circuit_program::CircuitOperation;
use crate::error::{AlgorithmError, AlgorithmResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Masks are held in a u64, so the input register is capped at 63 wires.
pub const MAXIMUM_INPUT_WIRE_COUNT: usize = 63;

// =============================================================================
// 1. OracleFunctionKind - Constant / Balanced tag
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleFunctionKind {
    /// f(x) = ancilla_flipped for every input x.
    Constant { ancilla_flipped: bool },
    /// f(x) = 1 for exactly half of all 2^n inputs; `bitmask` records which
    /// input wires carry the bracketed controlled flips.
    Balanced { bitmask: u64 },
}

impl OracleFunctionKind {
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant { .. })
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced { .. })
    }
}

// =============================================================================
// 2. BlackBoxOracle - Reversible oracle over n+1 wires
// =============================================================================

/// An ordered reversible gate sequence over `input_count + 1` wires. Wire
/// indices `0..input_count` are inputs; wire `input_count` is the ancilla the
/// function value is XORed into. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlackBoxOracle {
    kind: OracleFunctionKind,
    input_count: usize,
    operations: Vec<CircuitOperation>,
}

impl BlackBoxOracle {
    /// Constant oracle: identity, or an unconditional ancilla flip.
    pub fn constant(input_count: usize, ancilla_flipped: bool) -> AlgorithmResult<Self> {
        validate_input_count(input_count)?;

        let mut operations = Vec::new();
        if ancilla_flipped {
            operations.push(CircuitOperation::PauliXGate {
                target_qubit: input_count,
            });
        }

        Ok(Self {
            kind: OracleFunctionKind::Constant { ancilla_flipped },
            input_count,
            operations,
        })
    }

    /// Balanced oracle for a non-zero bitmask: each mask-set input wire gets
    /// a controlled ancilla flip bracketed by unconditional flips of that
    /// wire, laid out in three layers (flip, controlled flip, flip back).
    pub fn balanced(input_count: usize, bitmask: u64) -> AlgorithmResult<Self> {
        validate_input_count(input_count)?;

        let mask_limit = 1u64 << input_count;
        if bitmask == 0 {
            return Err(AlgorithmError::invalid_argument(
                "balanced oracle bitmask must be non-zero; a zero mask makes every \
                 controlled flip vacuous and the oracle constant",
            ));
        }
        if bitmask >= mask_limit {
            return Err(AlgorithmError::invalid_argument(format!(
                "balanced oracle bitmask {bitmask:#b} does not fit in {input_count} input wires"
            )));
        }

        let mask_wires: Vec<usize> =
            (0..input_count).filter(|i| (bitmask >> i) & 1 == 1).collect();

        let mut operations = Vec::new();
        for &wire in &mask_wires {
            operations.push(CircuitOperation::PauliXGate { target_qubit: wire });
        }
        for &wire in &mask_wires {
            operations.push(CircuitOperation::ControlledNotGate {
                control_qubit: wire,
                target_qubit: input_count,
            });
        }
        for &wire in &mask_wires {
            operations.push(CircuitOperation::PauliXGate { target_qubit: wire });
        }

        Ok(Self {
            kind: OracleFunctionKind::Balanced { bitmask },
            input_count,
            operations,
        })
    }

    pub fn kind(&self) -> OracleFunctionKind {
        self.kind
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Total wires including the ancilla.
    pub fn total_wire_count(&self) -> usize {
        self.input_count + 1
    }

    pub fn ancilla_wire(&self) -> usize {
        self.input_count
    }

    pub fn operations(&self) -> &[CircuitOperation] {
        &self.operations
    }

    /// Replays the gate sequence on classical bits: the reversible-circuit
    /// semantics restricted to basis states. Returns f(x), the value XORed
    /// into an ancilla initialized to zero.
    pub fn evaluate_classically(&self, input: u64) -> u8 {
        let mut wires = vec![0u8; self.total_wire_count()];
        for i in 0..self.input_count {
            wires[i] = ((input >> i) & 1) as u8;
        }

        for operation in &self.operations {
            match *operation {
                CircuitOperation::PauliXGate { target_qubit } => {
                    wires[target_qubit] ^= 1;
                }
                CircuitOperation::ControlledNotGate {
                    control_qubit,
                    target_qubit,
                } => {
                    wires[target_qubit] ^= wires[control_qubit];
                }
                // Oracles carry only reversible gates.
                CircuitOperation::HadamardGate { .. }
                | CircuitOperation::StageBoundary
                | CircuitOperation::MeasureQubit { .. } => {}
            }
        }

        wires[self.ancilla_wire()]
    }
}

// =============================================================================
// 3. Synthesizers - Random constant / balanced construction
// =============================================================================

/// Draws the constant oracle variant uniformly: identity, or the oracle that
/// flips the ancilla for every input. Both satisfy the constant invariant.
pub fn synthesize_constant(input_count: usize, rng: &mut impl Rng) -> AlgorithmResult<BlackBoxOracle> {
    validate_input_count(input_count)?;
    let ancilla_flipped = rng.gen_bool(0.5);
    tracing::debug!(input_count, ancilla_flipped, "synthesized constant oracle");
    BlackBoxOracle::constant(input_count, ancilla_flipped)
}

/// Draws a non-zero bitmask uniformly from [1, 2^n - 1] and builds the
/// balanced oracle it encodes. Zero is excluded by the draw range itself.
pub fn synthesize_balanced(input_count: usize, rng: &mut impl Rng) -> AlgorithmResult<BlackBoxOracle> {
    validate_input_count(input_count)?;
    let mask_limit = 1u64 << input_count;
    let bitmask = rng.gen_range(1..mask_limit);
    tracing::debug!(input_count, bitmask, "synthesized balanced oracle");
    BlackBoxOracle::balanced(input_count, bitmask)
}

fn validate_input_count(input_count: usize) -> AlgorithmResult<()> {
    if input_count < 1 {
        return Err(AlgorithmError::invalid_argument(
            "oracle input wire count must be at least 1",
        ));
    }
    if input_count > MAXIMUM_INPUT_WIRE_COUNT {
        return Err(AlgorithmError::invalid_argument(format!(
            "oracle input wire count {input_count} exceeds maximum {MAXIMUM_INPUT_WIRE_COUNT}"
        )));
    }
    Ok(())
}
