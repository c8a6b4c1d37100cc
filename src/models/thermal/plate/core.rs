//! Explicit finite-difference conduction in an L-shaped plate.
//!
//! The plate is discretized on a square grid whose upper-right quadrant is
//! cut away. Each plate node is classified into one of seventeen stencil
//! kinds, which together form the explicit update `T' = A·T + B`. The update
//! is marched in time until every node changes by less than a tolerance in a
//! single step, capturing snapshots along the way.

mod coefficients;
mod error;
mod field;
mod grid;
mod input;
mod march;
mod node_kind;
mod operator;

#[cfg(test)]
mod test_support;

pub use coefficients::Coefficients;
pub use error::{ConfigError, SolveError};
pub use field::Field;
pub use grid::Grid;
pub use input::{Conditions, Geometry, MAX_NODES, Material, Plate};
pub use march::{MarchConfig, Snapshot, Solution, Status, march};
pub use node_kind::NodeKind;
pub use operator::{
    Coupling, DenseSystem, NOMINAL_FOURIER_LIMIT, Operator, Row, Stability, Stencil,
};

/// Builds the operator for `plate`, starts from its initial field, and marches
/// to steady state.
///
/// # Errors
///
/// Returns a [`SolveError`] if `config` is invalid or the time step is
/// unstable and `config.allow_unstable` is off.
pub fn solve(plate: &Plate, config: &MarchConfig) -> Result<Solution, SolveError> {
    config.validate()?;
    let operator = Operator::build(plate, config.time_step)?;
    let initial = Field::initial(*operator.grid(), &plate.conditions);
    march(&operator, &initial, config)
}
