//! Transient conduction in an L-shaped plate.
//!
//! This module provides a [`twine_core::Model`] implementation that marches
//! the plate from its initial field to steady state. The computational core
//! is in the internal [`core`] module.
//!
//! # Geometry
//!
//! The plate occupies a square of side `L` with the upper-right quadrant
//! removed. Row 0 of the remaining stem is held at the surface temperature,
//! the west edge (x = 0) receives a heat input, the wall of the notch and the
//! east edge convect to ambient, and the remaining edges are adiabatic.
//!
//! # Example
//!
//! ```no_run
//! use twine_conduction::models::thermal::plate::{LPlate, Plate};
//! use twine_core::Model;
//!
//! let solution = LPlate::default().call(&Plate::default())?;
//! println!("{:?} after {} steps", solution.status, solution.steps);
//! # Ok::<(), twine_conduction::models::thermal::plate::SolveError>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Coefficients, Conditions, ConfigError, Coupling, DenseSystem, Field, Geometry, Grid,
    MAX_NODES, MarchConfig, Material, NOMINAL_FOURIER_LIMIT, NodeKind, Operator, Plate, Row,
    Snapshot, Solution, SolveError, Stability, Status, Stencil, march, solve,
};

use twine_core::Model;

/// Marches an L-shaped [`Plate`] to steady state with fixed numerical settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LPlate {
    /// Time step, budget, tolerance and capture settings.
    pub march: MarchConfig,
}

impl LPlate {
    /// Creates a model with the given marching settings.
    #[must_use]
    pub fn new(march: MarchConfig) -> Self {
        Self { march }
    }
}

impl Model for LPlate {
    type Input = Plate;
    type Output = Solution;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(input, &self.march)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Time, time::second};

    #[test]
    fn model_rejects_unstable_settings() {
        let model = LPlate::new(MarchConfig {
            time_step: Time::new::<second>(10.0),
            ..MarchConfig::default()
        });
        let err = model.call(&Plate::default()).unwrap_err();
        assert!(matches!(err, SolveError::Unstable { .. }));
    }

    #[test]
    fn model_delegates_to_solve() {
        let model = LPlate::new(MarchConfig {
            end_time: Time::new::<second>(2.0),
            capture_stride: 5,
            ..MarchConfig::default()
        });
        let solution = model.call(&Plate::default()).expect("stable defaults");

        assert_eq!(solution.steps, 21);
        let steps: Vec<usize> = solution.snapshots.iter().map(|s| s.step).collect();
        assert_eq!(steps, [0, 5, 10, 15, 20]);
        assert!(matches!(solution.status, Status::BudgetExhausted { .. }));
    }
}
