// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Unified Error Types
// =============================================================================
// Table of Contents:
//   1. AlgorithmError - Main error enum
//   2. BackendError - Execution-backend errors
//   3. Result type alias
// =============================================================================
// Purpose: Unified error handling across the runtime. Every failure is a
//          contract violation by the caller or the backend; nothing here is
//          retried or recovered.
// =============================================================================

use thiserror::Error;

// =============================================================================
// 1. AlgorithmError - Main error enum
// =============================================================================

#[derive(Debug, Error)]
pub enum AlgorithmError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

impl AlgorithmError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

// =============================================================================
// 2. BackendError - Execution-backend errors
// =============================================================================

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Dense backend: state vector too large for {qubits} qubits (maximum {max})")]
    StateTooLarge { qubits: usize, max: usize },

    #[error("Invalid qubit index {index}: circuit has {total} qubits")]
    InvalidQubitIndex { index: usize, total: usize },

    #[error("Invalid classical bit index {index}: circuit has {total} classical bits")]
    InvalidClassicalBitIndex { index: usize, total: usize },

    #[error("Invalid shot count: {0} (must be > 0)")]
    InvalidShotCount(usize),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

// =============================================================================
// 3. Result type alias
// =============================================================================

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
