// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Circuit Composition
// =============================================================================
// Table of Contents:
//   1. compose_deutsch_jozsa_circuit - Oracle embedding
// =============================================================================
// Purpose: Embeds a black-box oracle into the full Deutsch-Jozsa circuit
//          template: superposition-in, phase-kickback ancilla preparation,
//          the oracle stage, superposition-out, and input-wire measurement.
//          Stage boundaries separate the three stages for backends that care
//          about scheduling granularity.
// =============================================================================

use crate::circuit_program::ComposedCircuit;
use crate::error::{AlgorithmError, AlgorithmResult};
use crate::oracle_synthesis::BlackBoxOracle;

// =============================================================================
// 1. compose_deutsch_jozsa_circuit - Oracle embedding
// =============================================================================

/// Consumes an oracle over `n + 1` wires and produces the circuit over the
/// same wires plus `n` classical bits:
///
/// 1. Hadamard on each input wire.
/// 2. Ancilla to the minus state (flip, then Hadamard) so the oracle's
///    controlled flips kick back as phase on the input wires.
/// 3. Boundary, the oracle's operations verbatim, boundary.
/// 4. Hadamard on each input wire again, turning accumulated phase back into
///    a readable amplitude difference.
/// 5. Boundary, then measure input wire `i` into classical bit `i`. The
///    ancilla is never measured.
pub fn compose_deutsch_jozsa_circuit(oracle: BlackBoxOracle) -> AlgorithmResult<ComposedCircuit> {
    let input_count = oracle.input_count();
    if input_count < 1 {
        return Err(AlgorithmError::invalid_argument(
            "cannot compose a circuit around an oracle with no input wires",
        ));
    }

    let ancilla_wire = oracle.ancilla_wire();
    let mut circuit = ComposedCircuit::new(oracle.total_wire_count(), input_count);

    for wire in 0..input_count {
        circuit.apply_hadamard_gate(wire);
    }

    circuit.apply_pauli_x_gate(ancilla_wire);
    circuit.apply_hadamard_gate(ancilla_wire);
    circuit.insert_stage_boundary();

    circuit.append_operations(oracle.operations());
    circuit.insert_stage_boundary();

    for wire in 0..input_count {
        circuit.apply_hadamard_gate(wire);
    }
    circuit.insert_stage_boundary();

    for wire in 0..input_count {
        circuit.measure_qubit(wire, wire);
    }

    tracing::debug!(
        circuit_id = %circuit.id(),
        input_count,
        operation_count = circuit.operation_count(),
        "composed Deutsch-Jozsa circuit"
    );

    Ok(circuit)
}
