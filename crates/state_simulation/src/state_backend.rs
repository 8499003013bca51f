// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Dense State Vector
// =============================================================================
// Table of Contents:
//   1. QuantumStateVector - Full state-vector representation
// =============================================================================
// Purpose: Dense amplitude storage for small circuits. Qubit 0 maps to the
//          most significant bit of the basis-state index.
// =============================================================================

use num_complex::Complex64;

// =============================================================================
// 1. QuantumStateVector - Full state-vector representation
// =============================================================================

#[derive(Debug, Clone)]
pub struct QuantumStateVector {
    amplitudes: Vec<Complex64>,
    number_of_quantum_bits: usize,
}

impl QuantumStateVector {
    pub fn zero_state(number_of_quantum_bits: usize) -> Self {
        let dimension = 1usize << number_of_quantum_bits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            number_of_quantum_bits,
        }
    }

    pub fn number_of_quantum_bits(&self) -> usize {
        self.number_of_quantum_bits
    }

    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    pub fn set_amplitude(&mut self, index: usize, value: Complex64) {
        self.amplitudes[index] = value;
    }

    pub fn swap_amplitudes(&mut self, i: usize, j: usize) {
        self.amplitudes.swap(i, j);
    }

    pub fn probability_distribution(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Bit value of `qubit` within basis-state `index` (qubit 0 = MSB).
    pub fn basis_bit(&self, index: usize, qubit: usize) -> u8 {
        ((index >> (self.number_of_quantum_bits - 1 - qubit)) & 1) as u8
    }
}
