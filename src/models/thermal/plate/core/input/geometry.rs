use uom::si::{f64::Length, length::meter, ratio::ratio};

use crate::{
    models::thermal::plate::core::{ConfigError, Grid},
    support::constraint::StrictlyPositive,
};

/// Relative tolerance for `side_length / spacing` to count as a whole number.
const SPACING_TOLERANCE: f64 = 1e-9;

/// Largest supported node count per side.
pub const MAX_NODES: usize = 4001;

/// Size and resolution of the square grid enclosing the L-shaped plate.
///
/// The node count per side, `side_length / spacing + 1`, must be odd so a
/// node falls on the midline where the cut-out begins, and at least 5 so
/// every band of the stencil table contains a node. It is capped at
/// [`MAX_NODES`] so the `n²` field stays allocatable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    side_length: Length,
    spacing: Length,
    nodes: usize,
}

impl Geometry {
    /// Constructs a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either length is not strictly positive,
    /// if the side length is not a multiple of the spacing, or if the
    /// resulting node count is even, below 5, or above [`MAX_NODES`].
    pub fn new(side_length: Length, spacing: Length) -> Result<Self, ConfigError> {
        let side_length = StrictlyPositive::new(side_length)
            .map_err(ConfigError::invalid("side_length"))?
            .into_inner();
        let spacing = StrictlyPositive::new(spacing)
            .map_err(ConfigError::invalid("spacing"))?
            .into_inner();

        let intervals = (side_length / spacing).get::<ratio>();
        let whole = intervals.round();
        if !intervals.is_finite() || (intervals - whole).abs() > SPACING_TOLERANCE * whole.max(1.0)
        {
            return Err(ConfigError::SpacingMismatch {
                side_length,
                spacing,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_NODES as f64;
        if whole >= limit {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let nodes = (whole as usize).saturating_add(1);
            return Err(ConfigError::UnsupportedNodeCount { nodes });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nodes = whole as usize + 1;
        if nodes < 5 || nodes % 2 == 0 {
            return Err(ConfigError::UnsupportedNodeCount { nodes });
        }

        Ok(Self {
            side_length,
            spacing,
            nodes,
        })
    }

    /// Side length of the enclosing square.
    #[must_use]
    pub fn side_length(&self) -> Length {
        self.side_length
    }

    /// Node spacing in both directions.
    #[must_use]
    pub fn spacing(&self) -> Length {
        self.spacing
    }

    /// Number of nodes per side.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// The node grid described by this geometry.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.nodes, self.spacing)
    }
}

/// A 0.2 m plate on a 5 mm grid (41 nodes per side).
impl Default for Geometry {
    fn default() -> Self {
        Self {
            side_length: Length::new::<meter>(0.2),
            spacing: Length::new::<meter>(0.005),
            nodes: 41,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;
    use uom::si::length::millimeter;

    #[test]
    fn default_matches_constructor() {
        let geometry = Geometry::new(Length::new::<meter>(0.2), Length::new::<meter>(0.005))
            .expect("default geometry is valid");
        assert_eq!(geometry, Geometry::default());
        assert_eq!(geometry.grid().mid(), 20);
    }

    #[test]
    fn accepts_other_odd_grids() {
        let geometry = Geometry::new(Length::new::<meter>(0.04), Length::new::<millimeter>(5.0))
            .expect("9x9 grid is valid");
        assert_eq!(geometry.nodes(), 9);
        assert_eq!(geometry.grid().mid(), 4);
    }

    #[test]
    fn rejects_non_positive_lengths() {
        let err = Geometry::new(Length::new::<meter>(0.2), Length::new::<meter>(0.0)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "spacing",
                source: ConstraintError::Zero
            }
        );

        let err = Geometry::new(Length::new::<meter>(-0.2), Length::new::<meter>(0.005)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "side_length",
                ..
            }
        ));
    }

    #[test]
    fn rejects_fractional_spacing() {
        let err =
            Geometry::new(Length::new::<meter>(0.2), Length::new::<millimeter>(3.0)).unwrap_err();
        assert!(matches!(err, ConfigError::SpacingMismatch { .. }));
    }

    #[test]
    fn rejects_grids_without_a_midline_node() {
        let err =
            Geometry::new(Length::new::<meter>(0.21), Length::new::<millimeter>(30.0)).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedNodeCount { nodes: 8 });

        let err = Geometry::new(Length::new::<meter>(0.2), Length::new::<meter>(0.1)).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedNodeCount { nodes: 3 });

        let err = Geometry::new(Length::new::<meter>(0.2), Length::new::<meter>(0.04)).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedNodeCount { nodes: 6 });
    }

    #[test]
    fn rejects_grids_too_large_to_allocate() {
        let err = Geometry::new(Length::new::<meter>(1.0), Length::new::<meter>(1e-9)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedNodeCount {
                nodes: 1_000_000_001
            }
        );

        let err =
            Geometry::new(Length::new::<meter>(4.002), Length::new::<millimeter>(1.0)).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedNodeCount { nodes: 4003 });

        let geometry = Geometry::new(Length::new::<meter>(4.0), Length::new::<millimeter>(1.0))
            .expect("largest supported grid");
        assert_eq!(geometry.nodes(), MAX_NODES);
    }
}
