use serde::{Deserialize, Serialize};

/// Dense row-major square matrix addressed by stable-subset indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl PairMatrix {
    /// Creates a zeroed matrix with the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// Creates the outer product of two equally sized vectors.
    pub fn outer(left: &[f64], right: &[f64]) -> Self {
        debug_assert_eq!(left.len(), right.len());
        let dim = left.len();
        let mut data = Vec::with_capacity(dim * dim);
        for &a in left {
            for &b in right {
                data.push(a * b);
            }
        }
        Self { dim, data }
    }

    /// Returns the matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }

    /// Overwrites the entry at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dim + col] = value;
    }

    /// Adds `value` into the entry at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dim + col] += value;
    }

    /// Adds `scale * other` into this matrix element-wise.
    pub fn add_scaled(&mut self, other: &PairMatrix, scale: f64) {
        debug_assert_eq!(self.dim, other.dim);
        for (dst, src) in self.data.iter_mut().zip(other.data.iter()) {
            *dst += scale * src;
        }
    }

    /// Returns the element-wise difference `self - other`.
    pub fn difference(&self, other: &PairMatrix) -> PairMatrix {
        debug_assert_eq!(self.dim, other.dim);
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Self {
            dim: self.dim,
            data,
        }
    }

    /// Returns whether the matrix equals its transpose bit-for-bit.
    pub fn is_symmetric(&self) -> bool {
        for row in 0..self.dim {
            for col in (row + 1)..self.dim {
                if self.get(row, col) != self.get(col, row) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the flat row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
