// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Execution Boundary & Pipeline
// =============================================================================
// Table of Contents:
//   1. ExecutionBackendInterface - Swappable backend strategy
//   2. DeutschJozsaPipeline - Synthesis-to-verdict coordinator
// =============================================================================
// Purpose: Defines the sole external boundary of the core (circuit in,
//          outcome distribution out) and the sequential pipeline that folds
//          an oracle into a circuit, hands it to a backend, and classifies
//          the returned distribution. No retries; backend failures propagate
//          unchanged.
// =============================================================================

use crate::circuit_composition::compose_deutsch_jozsa_circuit;
use crate::circuit_program::ComposedCircuit;
use crate::error::AlgorithmResult;
use crate::measurement::MeasurementOutcomeDistribution;
use crate::oracle_synthesis::BlackBoxOracle;
use crate::outcome_classification::{classify_outcome_distribution, OracleVerdict};

// =============================================================================
// 1. ExecutionBackendInterface - Swappable backend strategy
// =============================================================================

/// A backend accepts a composed circuit, owned exactly once, and returns the
/// measurement-outcome distribution of however many executions it chose to
/// perform (a single ideal execution is sufficient). Stage boundaries carry
/// no semantic effect and may be ignored. Bit-string index 0 of every outcome
/// key must hold input wire 0's measured value.
pub trait ExecutionBackendInterface: Send + Sync {
    fn backend_name(&self) -> &str;

    fn execute_circuit(
        &self,
        circuit: ComposedCircuit,
    ) -> AlgorithmResult<MeasurementOutcomeDistribution>;
}

// =============================================================================
// 2. DeutschJozsaPipeline - Synthesis-to-verdict coordinator
// =============================================================================

/// One run is a strict sequential chain: compose, execute, classify. The
/// pipeline owns no shared state; independent runs may be parallelized by
/// the caller.
#[derive(Debug)]
pub struct DeutschJozsaPipeline<B: ExecutionBackendInterface> {
    execution_backend: B,
}

impl<B: ExecutionBackendInterface> DeutschJozsaPipeline<B> {
    pub fn new(execution_backend: B) -> Self {
        Self { execution_backend }
    }

    pub fn execution_backend(&self) -> &B {
        &self.execution_backend
    }

    /// Decides whether the oracle's black-box function is constant or
    /// balanced with a single backend execution.
    pub fn decide(&self, oracle: BlackBoxOracle) -> AlgorithmResult<OracleVerdict> {
        let input_count = oracle.input_count();
        let circuit = compose_deutsch_jozsa_circuit(oracle)?;
        tracing::debug!(
            circuit_id = %circuit.id(),
            backend = self.execution_backend.backend_name(),
            "submitting circuit to execution backend"
        );
        let outcomes = self.execution_backend.execute_circuit(circuit)?;
        classify_outcome_distribution(input_count, &outcomes)
    }

    /// Like `decide`, but also hands back the backend's raw distribution.
    pub fn decide_with_outcomes(
        &self,
        oracle: BlackBoxOracle,
    ) -> AlgorithmResult<(OracleVerdict, MeasurementOutcomeDistribution)> {
        let input_count = oracle.input_count();
        let circuit = compose_deutsch_jozsa_circuit(oracle)?;
        let outcomes = self.execution_backend.execute_circuit(circuit)?;
        let verdict = classify_outcome_distribution(input_count, &outcomes)?;
        Ok((verdict, outcomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlgorithmError, BackendError};

    /// Ideal in-memory stub: replays the circuit on classical basis states to
    /// recover the oracle's truth table, then emits the analytically known
    /// ideal outcome (all-zero for constant, non-zero otherwise) without any
    /// linear-algebra simulation.
    struct AnalyticIdealBackend;

    impl ExecutionBackendInterface for AnalyticIdealBackend {
        fn backend_name(&self) -> &str {
            "analytic_ideal_backend"
        }

        fn execute_circuit(
            &self,
            circuit: ComposedCircuit,
        ) -> AlgorithmResult<MeasurementOutcomeDistribution> {
            use crate::circuit_program::CircuitOperation;

            let input_count = circuit.input_wire_count();
            let boundaries: Vec<usize> = circuit
                .operations()
                .iter()
                .enumerate()
                .filter(|(_, op)| op.is_stage_boundary())
                .map(|(i, _)| i)
                .collect();
            let oracle_stage = &circuit.operations()[boundaries[0] + 1..boundaries[1]];

            // Classical replay of the oracle stage recovers the truth table.
            let evaluate = |input: u64| -> u8 {
                let mut wires = vec![0u8; circuit.number_of_quantum_bits()];
                for i in 0..input_count {
                    wires[i] = ((input >> i) & 1) as u8;
                }
                for op in oracle_stage {
                    match *op {
                        CircuitOperation::PauliXGate { target_qubit } => wires[target_qubit] ^= 1,
                        CircuitOperation::ControlledNotGate { control_qubit, target_qubit } => {
                            wires[target_qubit] ^= wires[control_qubit]
                        }
                        _ => {}
                    }
                }
                wires[input_count]
            };

            let first = evaluate(0);
            let constant = (0..(1u64 << input_count)).all(|x| evaluate(x) == first);

            let mut outcomes = MeasurementOutcomeDistribution::new();
            if constant {
                outcomes.record_outcome("0".repeat(input_count));
            } else {
                outcomes.record_outcome("1".repeat(input_count));
            }
            Ok(outcomes)
        }
    }

    struct FailingBackend;

    impl ExecutionBackendInterface for FailingBackend {
        fn backend_name(&self) -> &str {
            "failing_backend"
        }

        fn execute_circuit(
            &self,
            _circuit: ComposedCircuit,
        ) -> AlgorithmResult<MeasurementOutcomeDistribution> {
            Err(BackendError::ExecutionFailed("device offline".into()).into())
        }
    }

    #[test]
    fn test_pipeline_decides_constant() {
        let pipeline = DeutschJozsaPipeline::new(AnalyticIdealBackend);
        for ancilla_flipped in [false, true] {
            let oracle = BlackBoxOracle::constant(3, ancilla_flipped).unwrap();
            assert_eq!(pipeline.decide(oracle).unwrap(), OracleVerdict::Constant);
        }
    }

    #[test]
    fn test_pipeline_decides_balanced_for_every_mask() {
        let pipeline = DeutschJozsaPipeline::new(AnalyticIdealBackend);
        for bitmask in 1..8u64 {
            let oracle = BlackBoxOracle::balanced(3, bitmask).unwrap();
            assert_eq!(pipeline.decide(oracle).unwrap(), OracleVerdict::Balanced);
        }
    }

    #[test]
    fn test_backend_failure_propagates_unchanged() {
        let pipeline = DeutschJozsaPipeline::new(FailingBackend);
        let oracle = BlackBoxOracle::constant(2, false).unwrap();
        assert!(matches!(
            pipeline.decide(oracle),
            Err(AlgorithmError::Backend(BackendError::ExecutionFailed(_)))
        ));
    }

    #[test]
    fn test_decide_with_outcomes_exposes_distribution() {
        let pipeline = DeutschJozsaPipeline::new(AnalyticIdealBackend);
        let oracle = BlackBoxOracle::constant(2, true).unwrap();
        let (verdict, outcomes) = pipeline.decide_with_outcomes(oracle).unwrap();
        assert_eq!(verdict, OracleVerdict::Constant);
        assert_eq!(outcomes.count_of("00"), 1);
    }
}
