// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Circuit Program IR
// =============================================================================
// Table of Contents:
//   1. CircuitOperation - Tagged operation records
//   2. ComposedCircuit - Circuit container
// =============================================================================
// Purpose: Provides the plain-data circuit intermediate representation handed
//          to execution backends. Operations are tagged variants (kind plus
//          operand wire indices) so no backend's native types leak into the
//          oracle or the composed circuit.
// =============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// 1. CircuitOperation - Tagged operation records
// =============================================================================

/// One reversible gate, stage marker, or measurement over the circuit wires.
///
/// `StageBoundary` is semantically inert: backends that do not care about
/// scheduling granularity may skip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitOperation {
    HadamardGate { target_qubit: usize },
    PauliXGate { target_qubit: usize },
    ControlledNotGate { control_qubit: usize, target_qubit: usize },
    StageBoundary,
    MeasureQubit { target_qubit: usize, classical_bit: usize },
}

impl CircuitOperation {
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::HadamardGate { .. } => "hadamard_gate",
            Self::PauliXGate { .. } => "pauli_x_gate",
            Self::ControlledNotGate { .. } => "controlled_not_gate",
            Self::StageBoundary => "stage_boundary",
            Self::MeasureQubit { .. } => "measure_qubit",
        }
    }

    pub fn is_stage_boundary(&self) -> bool {
        matches!(self, Self::StageBoundary)
    }

    pub fn is_measurement(&self) -> bool {
        matches!(self, Self::MeasureQubit { .. })
    }
}

// =============================================================================
// 2. ComposedCircuit - Circuit container
// =============================================================================

/// A fully composed Deutsch-Jozsa circuit: declared wire counts plus the
/// ordered operation sequence. Built once by the composer and never mutated
/// afterwards; consumed exactly once by an execution backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedCircuit {
    id: Uuid,
    number_of_quantum_bits: usize,
    number_of_classical_bits: usize,
    operations: Vec<CircuitOperation>,
}

impl ComposedCircuit {
    pub fn new(number_of_quantum_bits: usize, number_of_classical_bits: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            number_of_quantum_bits,
            number_of_classical_bits,
            operations: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn number_of_quantum_bits(&self) -> usize {
        self.number_of_quantum_bits
    }

    pub fn number_of_classical_bits(&self) -> usize {
        self.number_of_classical_bits
    }

    /// Input wires are every wire except the trailing ancilla.
    pub fn input_wire_count(&self) -> usize {
        self.number_of_quantum_bits.saturating_sub(1)
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    pub fn operations(&self) -> &[CircuitOperation] {
        &self.operations
    }

    pub fn stage_boundary_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_stage_boundary()).count()
    }

    pub fn measurement_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_measurement()).count()
    }

    pub fn apply_hadamard_gate(&mut self, target_qubit: usize) -> &mut Self {
        self.operations
            .push(CircuitOperation::HadamardGate { target_qubit });
        self
    }

    pub fn apply_pauli_x_gate(&mut self, target_qubit: usize) -> &mut Self {
        self.operations
            .push(CircuitOperation::PauliXGate { target_qubit });
        self
    }

    pub fn apply_controlled_not_gate(&mut self, control_qubit: usize, target_qubit: usize) -> &mut Self {
        self.operations.push(CircuitOperation::ControlledNotGate {
            control_qubit,
            target_qubit,
        });
        self
    }

    pub fn insert_stage_boundary(&mut self) -> &mut Self {
        self.operations.push(CircuitOperation::StageBoundary);
        self
    }

    pub fn measure_qubit(&mut self, target_qubit: usize, classical_bit: usize) -> &mut Self {
        self.operations.push(CircuitOperation::MeasureQubit {
            target_qubit,
            classical_bit,
        });
        self
    }

    pub fn append_operations(&mut self, operations: &[CircuitOperation]) -> &mut Self {
        self.operations.extend_from_slice(operations);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_construction() {
        let mut circuit = ComposedCircuit::new(3, 2);
        circuit.apply_hadamard_gate(0);
        circuit.apply_hadamard_gate(1);
        circuit.apply_pauli_x_gate(2);
        circuit.apply_controlled_not_gate(0, 2);
        circuit.insert_stage_boundary();
        circuit.measure_qubit(0, 0);

        assert_eq!(circuit.number_of_quantum_bits(), 3);
        assert_eq!(circuit.number_of_classical_bits(), 2);
        assert_eq!(circuit.input_wire_count(), 2);
        assert_eq!(circuit.operation_count(), 6);
        assert_eq!(circuit.stage_boundary_count(), 1);
        assert_eq!(circuit.measurement_count(), 1);
        assert_eq!(
            circuit.operations()[3],
            CircuitOperation::ControlledNotGate {
                control_qubit: 0,
                target_qubit: 2,
            }
        );
    }

    #[test]
    fn test_operation_names() {
        let op = CircuitOperation::ControlledNotGate {
            control_qubit: 0,
            target_qubit: 2,
        };
        assert_eq!(op.operation_name(), "controlled_not_gate");
        assert!(!op.is_stage_boundary());
        assert!(CircuitOperation::StageBoundary.is_stage_boundary());
    }

    #[test]
    fn test_operation_serialization_round_trip() {
        let op = CircuitOperation::MeasureQubit {
            target_qubit: 1,
            classical_bit: 1,
        };
        let json = serde_json::to_string(&op).unwrap();
        let back: CircuitOperation = serde_json::from_str(&json).unwrap();
        assert_eq!(op, back);
    }
}
