// =============================================================================
// Deutsch-Jozsa Oracle Runtime - State Simulation
// =============================================================================
// Table of Contents:
//   1. Module Declarations
//   2. Re-exports
// =============================================================================
// Purpose: Reference execution backend for the Deutsch-Jozsa runtime. Dense
//          state-vector representation, gate kernels, and a seeded sampling
//          simulator behind circuit_runtime's ExecutionBackendInterface.
// =============================================================================

pub mod gate_kernels;
pub mod simulator;
pub mod state_backend;

pub use simulator::StateVectorSimulatorBackend;
pub use state_backend::QuantumStateVector;
