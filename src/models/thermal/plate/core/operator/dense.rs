//! Dense `(A, B)` form of the update operator.

/// Dense update `T' = A·T + B` over every grid node.
///
/// Rows of fixed nodes are zero with `B = Ts`; rows of cut-out nodes are zero
/// with `B = 0` and carry no meaning. This form exists for inspection and
/// export; marching uses the stencil form.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseSystem {
    size: usize,
    a: Vec<f64>,
    b: Vec<f64>,
}

impl DenseSystem {
    pub(super) fn zeros(size: usize) -> Self {
        Self {
            size,
            a: vec![0.0; size * size],
            b: vec![0.0; size],
        }
    }

    pub(super) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] = value;
    }

    pub(super) fn set_b(&mut self, row: usize, value: f64) {
        self.b[row] = value;
    }

    /// Number of unknowns (rows and columns of `A`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry `A[row, col]`.
    #[must_use]
    pub fn a(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Row `row` of `A`.
    #[must_use]
    pub fn a_row(&self, row: usize) -> &[f64] {
        &self.a[row * self.size..(row + 1) * self.size]
    }

    /// Entry `B[row]`.
    #[must_use]
    pub fn b(&self, row: usize) -> f64 {
        self.b[row]
    }
}
