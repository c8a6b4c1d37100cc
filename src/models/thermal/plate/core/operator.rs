//! Stencil-form update operator for the L-shaped plate.
//!
//! The operator is built once per plate and time step. It stores, for every
//! plate node, the explicit update weights of the node and its four-connected
//! neighbors, so a step costs `O(nodes)` rather than the `O(nodes²)` of the
//! equivalent dense matrix.

mod dense;
mod stability;
mod stencil;

pub use dense::DenseSystem;
pub use stability::{NOMINAL_FOURIER_LIMIT, Stability};
pub use stencil::Stencil;

use uom::si::{f64::Time, time::second};

use crate::support::constraint::StrictlyPositive;

use super::{Coefficients, ConfigError, Grid, NodeKind, Plate};

/// Weight of one neighbor in a node's update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coupling {
    /// Column-major index of the neighbor.
    pub node: usize,

    /// Weight applied to the neighbor's temperature.
    pub weight: f64,
}

/// Update rule of one plate node.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Column-major index of the node.
    pub node: usize,

    /// Stencil kind of the node.
    pub kind: NodeKind,

    /// Weight applied to the node's own temperature.
    pub diagonal: f64,

    /// Nonzero neighbor weights in north, south, west, east order.
    pub couplings: Vec<Coupling>,

    /// Constant added each step (surface, ambient, or source contribution).
    pub offset: f64,
}

impl Row {
    fn new(grid: &Grid, node: usize, kind: NodeKind, stencil: &Stencil) -> Self {
        let n = grid.nodes();
        let neighbors = [
            node.wrapping_sub(1),
            node + 1,
            node.wrapping_sub(n),
            node + n,
        ];
        let couplings = neighbors
            .into_iter()
            .zip(stencil.neighbors())
            .filter(|&(_, weight)| weight != 0.0)
            .map(|(node, weight)| Coupling { node, weight })
            .collect();

        Self {
            node,
            kind,
            diagonal: stencil.diagonal,
            couplings,
            offset: stencil.offset,
        }
    }

    /// Evaluates the updated temperature of this node from `field`.
    ///
    /// Fixed nodes return their offset regardless of `field`.
    #[must_use]
    pub fn evaluate(&self, field: &[f64]) -> f64 {
        if self.kind.is_fixed() {
            return self.offset;
        }
        let mut value = self.diagonal * field[self.node];
        for coupling in &self.couplings {
            value += coupling.weight * field[coupling.node];
        }
        value + self.offset
    }

    /// Weight applied to `node`'s temperature, or zero if it does not take part.
    #[must_use]
    pub fn weight(&self, node: usize) -> f64 {
        if node == self.node {
            return self.diagonal;
        }
        self.couplings
            .iter()
            .find(|coupling| coupling.node == node)
            .map_or(0.0, |coupling| coupling.weight)
    }
}

/// Explicit update `T' = A·T + B` for every plate node, in stencil form.
#[derive(Debug, Clone)]
pub struct Operator {
    grid: Grid,
    time_step: Time,
    coefficients: Coefficients,
    kinds: Vec<NodeKind>,
    rows: Vec<Option<Row>>,
}

impl Operator {
    /// Classifies every node of `plate` and builds its update rule for `time_step`.
    ///
    /// Stability is not enforced here; see [`Operator::stability`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `time_step` is not strictly positive.
    pub fn build(plate: &Plate, time_step: Time) -> Result<Self, ConfigError> {
        let time_step = StrictlyPositive::new(time_step)
            .map_err(ConfigError::invalid("time_step"))?
            .into_inner();

        let grid = plate.geometry.grid();
        let coefficients = Coefficients::new(plate, time_step);

        let kinds: Vec<NodeKind> = (0..grid.size())
            .map(|index| {
                let (row, col) = grid.position(index);
                NodeKind::classify(&grid, row, col)
            })
            .collect();

        let rows = kinds
            .iter()
            .enumerate()
            .map(|(node, &kind)| {
                Stencil::for_kind(kind, &coefficients)
                    .map(|stencil| Row::new(&grid, node, kind, &stencil))
            })
            .collect();

        Ok(Self {
            grid,
            time_step,
            coefficients,
            kinds,
            rows,
        })
    }

    /// Grid the operator acts on.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Time step the operator advances by.
    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    /// Dimensionless groups used by every stencil.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Stencil kind of every node, in column-major order.
    #[must_use]
    pub fn kinds(&self) -> &[NodeKind] {
        &self.kinds
    }

    /// Update rule of `node`, or `None` for cut-out nodes.
    #[must_use]
    pub fn row(&self, node: usize) -> Option<&Row> {
        self.rows.get(node).and_then(Option::as_ref)
    }

    /// Update rules of every plate node, in column-major order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().flatten()
    }

    /// Compares the Fourier number against the explicit-scheme bound.
    #[must_use]
    pub fn stability(&self) -> Stability {
        Stability::assess(self.kinds.iter().copied(), &self.coefficients)
    }

    /// Writes `A·current + B` into `next` for every plate node.
    ///
    /// Cut-out entries of `next` are left untouched. Every node reads from the
    /// same `current`, so no node sees a partially updated field.
    ///
    /// # Panics
    ///
    /// Panics if either slice is shorter than the grid.
    pub fn apply(&self, current: &[f64], next: &mut [f64]) {
        for row in self.rows() {
            next[row.node] = row.evaluate(current);
        }
    }

    /// Exports the update as a dense `(A, B)` pair.
    #[must_use]
    pub fn to_dense(&self) -> DenseSystem {
        let mut dense = DenseSystem::zeros(self.grid.size());
        for row in self.rows() {
            dense.set_b(row.node, row.offset);
            if row.kind.is_fixed() {
                continue;
            }
            dense.set(row.node, row.node, row.diagonal);
            for coupling in &row.couplings {
                dense.set(row.node, coupling.node, coupling.weight);
            }
        }
        dense
    }

    /// Time step in seconds.
    pub(super) fn dt(&self) -> f64 {
        self.time_step.get::<second>()
    }
}
