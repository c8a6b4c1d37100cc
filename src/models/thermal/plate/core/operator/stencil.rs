//! Update coefficients for each node kind.

use crate::models::thermal::plate::core::{Coefficients, NodeKind};

/// Explicit update of one node:
/// `T' = diagonal·T + north·T_N + south·T_S + west·T_W + east·T_E + offset`.
///
/// A zero weight means the neighbor does not take part; the neighbor may not
/// exist on the grid at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    pub diagonal: f64,
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
    pub offset: f64,
}

impl Stencil {
    /// Returns the stencil of `kind`, or `None` for [`NodeKind::CutOut`].
    ///
    /// Neighbors across an adiabatic or mirrored edge have their weight moved
    /// to the opposite neighbor, which is why some weights are `2·F0`. The
    /// re-entrant corner carries a three-quarter control volume, hence the
    /// `2/3` and `4/3` weights.
    #[must_use]
    pub fn for_kind(kind: NodeKind, c: &Coefficients) -> Option<Self> {
        let f0 = c.fourier;
        let bi = c.biot;
        let free = 1.0 - 4.0 * f0;
        let convective = free - 2.0 * bi * f0;
        let ambient = 2.0 * bi * f0 * c.ambient;

        let stencil = match kind {
            NodeKind::WestFixed | NodeKind::StemFixed | NodeKind::NotchFixed => Self {
                offset: c.surface,
                ..Self::ZERO
            },
            NodeKind::WestHeated => Self {
                diagonal: free,
                north: f0,
                south: f0,
                east: 2.0 * f0,
                offset: c.source,
                ..Self::ZERO
            },
            NodeKind::WestHeatedCorner => Self {
                diagonal: free,
                north: 2.0 * f0,
                east: 2.0 * f0,
                offset: c.source,
                ..Self::ZERO
            },
            NodeKind::StemInterior | NodeKind::NotchInterior | NodeKind::FootInterior => Self {
                diagonal: free,
                north: f0,
                south: f0,
                west: f0,
                east: f0,
                offset: 0.0,
            },
            NodeKind::StemBottom | NodeKind::NotchBottom | NodeKind::FootBottom => Self {
                diagonal: free,
                north: 2.0 * f0,
                west: f0,
                east: f0,
                ..Self::ZERO
            },
            NodeKind::NotchWall => Self {
                diagonal: convective,
                north: f0,
                south: f0,
                west: 2.0 * f0,
                offset: ambient,
                ..Self::ZERO
            },
            NodeKind::ReentrantCorner => Self {
                diagonal: free - (2.0 / 3.0) * bi * f0,
                north: (2.0 / 3.0) * f0,
                south: (4.0 / 3.0) * f0,
                west: (4.0 / 3.0) * f0,
                east: (2.0 / 3.0) * f0,
                offset: (2.0 / 3.0) * bi * f0 * c.ambient,
            },
            NodeKind::FootTop => Self {
                diagonal: free,
                south: 2.0 * f0,
                west: f0,
                east: f0,
                ..Self::ZERO
            },
            NodeKind::EastTopCorner => Self {
                diagonal: convective,
                south: 2.0 * f0,
                west: 2.0 * f0,
                offset: ambient,
                ..Self::ZERO
            },
            NodeKind::EastEdge => Self {
                diagonal: convective,
                north: f0,
                south: f0,
                west: 2.0 * f0,
                offset: ambient,
                ..Self::ZERO
            },
            NodeKind::EastBottomCorner => Self {
                diagonal: convective,
                north: 2.0 * f0,
                west: 2.0 * f0,
                offset: ambient,
                ..Self::ZERO
            },
            NodeKind::CutOut => return None,
        };

        Some(stencil)
    }

    const ZERO: Self = Self {
        diagonal: 0.0,
        north: 0.0,
        south: 0.0,
        west: 0.0,
        east: 0.0,
        offset: 0.0,
    };

    /// Sum of the neighbor weights.
    #[must_use]
    pub fn neighbor_sum(&self) -> f64 {
        self.north + self.south + self.west + self.east
    }

    /// Neighbor weights in north, south, west, east order.
    #[must_use]
    pub fn neighbors(&self) -> [f64; 4] {
        [self.north, self.south, self.west, self.east]
    }
}
