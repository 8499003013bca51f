// =============================================================================
// Deutsch-Jozsa Oracle Runtime - State-Vector Simulator Backend
// =============================================================================
// Table of Contents:
//   1. StateVectorSimulatorBackend - Seeded sampling simulator
//   2. ExecutionBackendInterface implementation
// =============================================================================
// Purpose: Executes a composed circuit on the dense state vector: unitary
//          stages evolve the amplitudes, then the measured wires' marginal
//          distribution (ancilla traced out) is sampled shot_count times with
//          a seeded generator.
// =============================================================================

use crate::gate_kernels::apply_unitary_operation;
use crate::state_backend::QuantumStateVector;
use circuit_runtime::circuit_program::{CircuitOperation, ComposedCircuit};
use circuit_runtime::error::{AlgorithmResult, BackendError};
use circuit_runtime::execution::ExecutionBackendInterface;
use circuit_runtime::measurement::MeasurementOutcomeDistribution;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// State vectors grow as 2^n; refuse circuits past this wire count.
pub const DEFAULT_MAXIMUM_DENSE_QUBITS: usize = 24;

// =============================================================================
// 1. StateVectorSimulatorBackend - Seeded sampling simulator
// =============================================================================

#[derive(Debug)]
pub struct StateVectorSimulatorBackend {
    shot_count: usize,
    maximum_dense_qubits: usize,
    sampling_rng: Mutex<StdRng>,
}

impl Default for StateVectorSimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StateVectorSimulatorBackend {
    pub fn new() -> Self {
        Self {
            shot_count: 1,
            maximum_dense_qubits: DEFAULT_MAXIMUM_DENSE_QUBITS,
            sampling_rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            shot_count: 1,
            maximum_dense_qubits: DEFAULT_MAXIMUM_DENSE_QUBITS,
            sampling_rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn with_shot_count(mut self, shot_count: usize) -> Self {
        self.shot_count = shot_count;
        self
    }

    pub fn with_maximum_dense_qubits(mut self, maximum_dense_qubits: usize) -> Self {
        self.maximum_dense_qubits = maximum_dense_qubits;
        self
    }

    pub fn shot_count(&self) -> usize {
        self.shot_count
    }

    /// Marginal probability per classical-bit string: unmeasured wires (the
    /// ancilla) are summed out. BTreeMap keeps sampling order deterministic.
    fn measured_marginal_distribution(
        state: &QuantumStateVector,
        measurements: &[(usize, usize)],
        classical_bit_count: usize,
    ) -> BTreeMap<String, f64> {
        let mut marginal: BTreeMap<String, f64> = BTreeMap::new();
        let probabilities = state.probability_distribution();

        for (index, probability) in probabilities.into_iter().enumerate() {
            if probability <= 0.0 {
                continue;
            }
            let mut key = vec![b'0'; classical_bit_count];
            for &(target_qubit, classical_bit) in measurements {
                if state.basis_bit(index, target_qubit) == 1 {
                    key[classical_bit] = b'1';
                }
            }
            let key = String::from_utf8(key).unwrap_or_default();
            *marginal.entry(key).or_insert(0.0) += probability;
        }

        marginal
    }

    fn sample_outcome(marginal: &BTreeMap<String, f64>, random_value: f64) -> Option<&str> {
        let mut cumulative = 0.0;
        for (bitstring, probability) in marginal {
            cumulative += probability;
            if random_value < cumulative {
                return Some(bitstring);
            }
        }
        // Floating-point round-off can leave the cumulative sum a hair
        // under 1.0; fall back to the last key.
        marginal.keys().next_back().map(String::as_str)
    }
}

// =============================================================================
// 2. ExecutionBackendInterface implementation
// =============================================================================

impl ExecutionBackendInterface for StateVectorSimulatorBackend {
    fn backend_name(&self) -> &str {
        "state_vector_simulator"
    }

    fn execute_circuit(
        &self,
        circuit: ComposedCircuit,
    ) -> AlgorithmResult<MeasurementOutcomeDistribution> {
        let qubits = circuit.number_of_quantum_bits();
        if qubits > self.maximum_dense_qubits {
            return Err(BackendError::StateTooLarge {
                qubits,
                max: self.maximum_dense_qubits,
            }
            .into());
        }
        if self.shot_count == 0 {
            return Err(BackendError::InvalidShotCount(0).into());
        }

        let mut state = QuantumStateVector::zero_state(qubits);
        let mut measurements: Vec<(usize, usize)> = Vec::new();

        for operation in circuit.operations() {
            match *operation {
                CircuitOperation::MeasureQubit {
                    target_qubit,
                    classical_bit,
                } => {
                    if target_qubit >= qubits {
                        return Err(BackendError::InvalidQubitIndex {
                            index: target_qubit,
                            total: qubits,
                        }
                        .into());
                    }
                    if classical_bit >= circuit.number_of_classical_bits() {
                        return Err(BackendError::InvalidClassicalBitIndex {
                            index: classical_bit,
                            total: circuit.number_of_classical_bits(),
                        }
                        .into());
                    }
                    measurements.push((target_qubit, classical_bit));
                }
                ref unitary => apply_unitary_operation(&mut state, unitary)?,
            }
        }

        if measurements.is_empty() {
            return Err(BackendError::ExecutionFailed(
                "circuit declares no measurements".into(),
            )
            .into());
        }

        let marginal = Self::measured_marginal_distribution(
            &state,
            &measurements,
            circuit.number_of_classical_bits(),
        );

        let mut outcomes = MeasurementOutcomeDistribution::new();
        let mut rng = self.sampling_rng.lock();
        for _ in 0..self.shot_count {
            let random_value: f64 = rng.gen();
            if let Some(bitstring) = Self::sample_outcome(&marginal, random_value) {
                outcomes.record_outcome(bitstring.to_string());
            }
        }

        tracing::debug!(
            circuit_id = %circuit.id(),
            shots = self.shot_count,
            distinct_outcomes = outcomes.distinct_outcome_count(),
            "executed circuit on dense state vector"
        );

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_runtime::circuit_composition::compose_deutsch_jozsa_circuit;
    use circuit_runtime::error::AlgorithmError;
    use circuit_runtime::execution::DeutschJozsaPipeline;
    use circuit_runtime::oracle_synthesis::{
        synthesize_balanced, synthesize_constant, BlackBoxOracle,
    };
    use circuit_runtime::outcome_classification::{
        classify_outcome_distribution, OracleVerdict,
    };

    fn execute(oracle: BlackBoxOracle, seed: u64) -> MeasurementOutcomeDistribution {
        let backend = StateVectorSimulatorBackend::with_seed(seed);
        let circuit = compose_deutsch_jozsa_circuit(oracle).unwrap();
        backend.execute_circuit(circuit).unwrap()
    }

    #[test]
    fn test_constant_identity_oracle_yields_all_zero_outcome() {
        let oracle = BlackBoxOracle::constant(2, false).unwrap();
        let outcomes = execute(oracle, 0);
        assert_eq!(outcomes.total_shots(), 1);
        assert_eq!(outcomes.count_of("00"), 1);
        assert_eq!(
            classify_outcome_distribution(2, &outcomes).unwrap(),
            OracleVerdict::Constant
        );
    }

    #[test]
    fn test_constant_flipping_oracle_yields_all_zero_outcome() {
        let oracle = BlackBoxOracle::constant(2, true).unwrap();
        let outcomes = execute(oracle, 0);
        assert_eq!(outcomes.count_of("00"), 1);
    }

    #[test]
    fn test_balanced_outcome_is_the_mask_bitstring() {
        // Ideal execution concentrates the input register on the mask:
        // char i of the outcome is mask bit i.
        let outcomes = execute(BlackBoxOracle::balanced(2, 0b10).unwrap(), 1);
        assert_eq!(outcomes.count_of("01"), 1);

        let outcomes = execute(BlackBoxOracle::balanced(2, 0b01).unwrap(), 1);
        assert_eq!(outcomes.count_of("10"), 1);
    }

    #[test]
    fn test_balanced_verdict_for_every_mask_exhaustively() {
        for input_count in 1..=3usize {
            for bitmask in 1..(1u64 << input_count) {
                let oracle = BlackBoxOracle::balanced(input_count, bitmask).unwrap();
                let outcomes = execute(oracle, bitmask);
                assert!(
                    !outcomes.contains_outcome(&"0".repeat(input_count)),
                    "mask {bitmask:#b} over {input_count} wires leaked the all-zero outcome"
                );
                assert_eq!(
                    classify_outcome_distribution(input_count, &outcomes).unwrap(),
                    OracleVerdict::Balanced
                );
            }
        }
    }

    #[test]
    fn test_ideal_outcome_is_seed_independent() {
        // The Deutsch-Jozsa distribution is a point mass, so the sampling
        // seed cannot change the verdict.
        for seed in 0..32u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pipeline = DeutschJozsaPipeline::new(StateVectorSimulatorBackend::with_seed(seed));

            let constant = synthesize_constant(3, &mut rng).unwrap();
            assert_eq!(pipeline.decide(constant).unwrap(), OracleVerdict::Constant);

            let balanced = synthesize_balanced(3, &mut rng).unwrap();
            assert_eq!(pipeline.decide(balanced).unwrap(), OracleVerdict::Balanced);
        }
    }

    #[test]
    fn test_multi_shot_execution_concentrates_on_one_outcome() {
        let backend = StateVectorSimulatorBackend::with_seed(3).with_shot_count(100);
        let circuit =
            compose_deutsch_jozsa_circuit(BlackBoxOracle::constant(2, false).unwrap()).unwrap();
        let outcomes = backend.execute_circuit(circuit).unwrap();
        assert_eq!(outcomes.total_shots(), 100);
        assert_eq!(outcomes.count_of("00"), 100);
        assert_eq!(outcomes.distinct_outcome_count(), 1);
    }

    #[test]
    fn test_zero_shot_count_is_rejected() {
        let backend = StateVectorSimulatorBackend::with_seed(0).with_shot_count(0);
        let circuit =
            compose_deutsch_jozsa_circuit(BlackBoxOracle::constant(2, false).unwrap()).unwrap();
        assert!(matches!(
            backend.execute_circuit(circuit),
            Err(AlgorithmError::Backend(BackendError::InvalidShotCount(0)))
        ));
    }

    #[test]
    fn test_oversized_circuit_is_rejected() {
        let backend = StateVectorSimulatorBackend::with_seed(0).with_maximum_dense_qubits(4);
        let circuit =
            compose_deutsch_jozsa_circuit(BlackBoxOracle::balanced(5, 1).unwrap()).unwrap();
        assert!(matches!(
            backend.execute_circuit(circuit),
            Err(AlgorithmError::Backend(BackendError::StateTooLarge { qubits: 6, max: 4 }))
        ));
    }
}
