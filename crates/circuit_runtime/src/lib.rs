// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Circuit Runtime
// =============================================================================
// Table of Contents:
//   1. Module Declarations
//   2. Prelude Module
// =============================================================================
// Purpose: Core layer of the Deutsch-Jozsa pipeline: plain-data circuit IR,
//          oracle synthesis, circuit composition, outcome classification, and
//          the execution-backend boundary. Contains no simulation code; state
//          evolution lives behind ExecutionBackendInterface.
// =============================================================================

pub mod circuit_composition;
pub mod circuit_program;
pub mod error;
pub mod execution;
pub mod measurement;
pub mod oracle_synthesis;
pub mod outcome_classification;

pub mod prelude {
    pub use crate::circuit_composition::*;
    pub use crate::circuit_program::*;
    pub use crate::error::*;
    pub use crate::execution::*;
    pub use crate::measurement::*;
    pub use crate::oracle_synthesis::*;
    pub use crate::outcome_classification::*;
}
