use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

use super::NodeKind;

/// Errors raised while validating plate or marching inputs.
///
/// These are reported before any operator is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A physical or numerical input violates its sign constraint.
    #[error("invalid {field}: {source}")]
    Invalid {
        /// Name of the offending input.
        field: &'static str,

        /// Constraint that was violated.
        source: ConstraintError,
    },

    /// An input that may take any sign is NaN or infinite.
    #[error("{field} must be finite")]
    NotFinite {
        /// Name of the offending input.
        field: &'static str,
    },

    /// The side length is not a whole number of grid spacings.
    #[error("side length {side_length:?} is not a multiple of spacing {spacing:?}")]
    SpacingMismatch {
        /// Requested side length.
        side_length: Length,

        /// Requested grid spacing.
        spacing: Length,
    },

    /// The node count cannot place a node on the midline of the L.
    #[error("grid needs an odd node count between 5 and 4001 per side, got {nodes}")]
    UnsupportedNodeCount {
        /// Node count per side implied by the geometry.
        nodes: usize,
    },
}

impl ConfigError {
    /// Returns a mapper that tags a [`ConstraintError`] with the input name.
    pub(super) fn invalid(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Invalid { field, source }
    }
}

/// Errors that can occur while solving the plate.
///
/// Running out of time steps is not an error; see [`Status`](super::Status).
#[derive(Debug, Error)]
pub enum SolveError {
    /// The plate or marching configuration is invalid.
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    /// The explicit update would amplify errors and `allow_unstable` is off.
    #[error("explicit scheme is unstable: Fourier number {fourier} exceeds {limit} at {kind:?} nodes")]
    Unstable {
        /// Fourier number of the operator.
        fourier: f64,

        /// Largest stable Fourier number for this plate.
        limit: f64,

        /// Node kind that sets the limit.
        kind: NodeKind,
    },

    /// The initial field was built for a different grid.
    #[error("initial field has {found} nodes but the operator expects {expected}")]
    FieldMismatch {
        /// Node count of the operator's grid.
        expected: usize,

        /// Node count of the supplied field.
        found: usize,
    },
}
