use crate::models::thermal::plate::core::{Conditions, Geometry, Material};

/// Complete physical description of the L-shaped plate.
///
/// Each part is validated on construction, so a `Plate` is always physically
/// meaningful. Numerical settings live in [`MarchConfig`](super::super::MarchConfig).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plate {
    /// Grid size and resolution.
    pub geometry: Geometry,

    /// Thermophysical properties.
    pub material: Material,

    /// Boundary and initial conditions.
    pub conditions: Conditions,
}
