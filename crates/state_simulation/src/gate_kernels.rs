// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Gate Kernels
// =============================================================================
// Table of Contents:
//   1. Single-qubit kernels (Hadamard, Pauli X)
//   2. Two-qubit kernel (Controlled NOT)
//   3. apply_unitary_operation - IR dispatch
// =============================================================================
// Purpose: In-place state-vector updates for the gate set the Deutsch-Jozsa
//          IR uses. Bit-mask loops over the dense amplitude array; qubit 0 is
//          the most significant index bit.
// =============================================================================

use crate::state_backend::QuantumStateVector;
use circuit_runtime::circuit_program::CircuitOperation;
use circuit_runtime::error::BackendError;

// =============================================================================
// 1. Single-qubit kernels
// =============================================================================

pub fn apply_hadamard_gate(state: &mut QuantumStateVector, target_qubit: usize) {
    let n = state.number_of_quantum_bits();
    let target_mask = 1usize << (n - 1 - target_qubit);
    let inv_sqrt2 = 1.0 / std::f64::consts::SQRT_2;

    let dim = state.dimension();
    for i in 0..dim {
        if (i & target_mask) == 0 {
            let j = i | target_mask;
            let a = state.amplitude(i);
            let b = state.amplitude(j);
            state.set_amplitude(i, (a + b) * inv_sqrt2);
            state.set_amplitude(j, (a - b) * inv_sqrt2);
        }
    }
}

pub fn apply_pauli_x_gate(state: &mut QuantumStateVector, target_qubit: usize) {
    let n = state.number_of_quantum_bits();
    let target_mask = 1usize << (n - 1 - target_qubit);

    let dim = state.dimension();
    for i in 0..dim {
        if (i & target_mask) == 0 {
            let j = i | target_mask;
            state.swap_amplitudes(i, j);
        }
    }
}

// =============================================================================
// 2. Two-qubit kernel
// =============================================================================

pub fn apply_controlled_not_gate(
    state: &mut QuantumStateVector,
    control_qubit: usize,
    target_qubit: usize,
) {
    let n = state.number_of_quantum_bits();
    let control_mask = 1usize << (n - 1 - control_qubit);
    let target_mask = 1usize << (n - 1 - target_qubit);

    let dim = state.dimension();
    for i in 0..dim {
        if (i & control_mask) != 0 && (i & target_mask) == 0 {
            let j = i | target_mask;
            state.swap_amplitudes(i, j);
        }
    }
}

// =============================================================================
// 3. apply_unitary_operation - IR dispatch
// =============================================================================

/// Applies one unitary IR operation in place. Stage boundaries are inert;
/// measurements are the simulator's job and are rejected here.
pub fn apply_unitary_operation(
    state: &mut QuantumStateVector,
    operation: &CircuitOperation,
) -> Result<(), BackendError> {
    let total = state.number_of_quantum_bits();
    let check_wire = |index: usize| -> Result<(), BackendError> {
        if index >= total {
            Err(BackendError::InvalidQubitIndex { index, total })
        } else {
            Ok(())
        }
    };

    match *operation {
        CircuitOperation::HadamardGate { target_qubit } => {
            check_wire(target_qubit)?;
            apply_hadamard_gate(state, target_qubit);
        }
        CircuitOperation::PauliXGate { target_qubit } => {
            check_wire(target_qubit)?;
            apply_pauli_x_gate(state, target_qubit);
        }
        CircuitOperation::ControlledNotGate {
            control_qubit,
            target_qubit,
        } => {
            check_wire(control_qubit)?;
            check_wire(target_qubit)?;
            apply_controlled_not_gate(state, control_qubit, target_qubit);
        }
        CircuitOperation::StageBoundary => {}
        CircuitOperation::MeasureQubit { .. } => {
            return Err(BackendError::ExecutionFailed(
                "measurement reached the unitary kernel dispatch".into(),
            ));
        }
    }
    Ok(())
}
