//! Node classification for the L-shaped grid.
//!
//! The plate is a full-height *stem* (columns `0..=mid`) joined to a
//! half-height *foot* (columns `mid+1..n`, rows `mid..n`). The upper-right
//! quadrant above the foot is the cut-out. Row 0 of the stem is held at the
//! surface temperature, the west edge receives the heat input, the notch wall
//! and east edge convect to ambient, and the bottom edge and the top of the
//! foot are adiabatic.

use super::Grid;

/// Stencil type of a grid node.
///
/// Seventeen kinds carry an update rule; [`NodeKind::CutOut`] marks nodes
/// outside the plate, which are never solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// West edge, row 0: held at the surface temperature.
    WestFixed,
    /// West edge between the fixed row and the bottom: heated, mirrored east neighbor.
    WestHeated,
    /// West edge, bottom row: heated corner.
    WestHeatedCorner,
    /// Stem columns between the west edge and the notch, row 0: fixed.
    StemFixed,
    /// Stem interior: plain five-point stencil.
    StemInterior,
    /// Stem bottom row: adiabatic edge.
    StemBottom,
    /// Notch column, row 0: fixed.
    NotchFixed,
    /// Notch column above the re-entrant corner: convective wall facing the cut-out.
    NotchWall,
    /// Re-entrant corner of the L.
    ReentrantCorner,
    /// Notch column below the re-entrant corner: plain five-point stencil.
    NotchInterior,
    /// Notch column, bottom row: adiabatic edge.
    NotchBottom,
    /// Top row of the foot: adiabatic edge below the cut-out.
    FootTop,
    /// Foot interior: plain five-point stencil.
    FootInterior,
    /// Foot bottom row: adiabatic edge.
    FootBottom,
    /// East edge, top of the foot: convective corner.
    EastTopCorner,
    /// East edge: convective.
    EastEdge,
    /// East edge, bottom row: convective corner.
    EastBottomCorner,
    /// Outside the plate.
    CutOut,
}

impl NodeKind {
    /// Every kind that carries an update rule, in column-band order.
    pub const STENCILS: [NodeKind; 17] = [
        NodeKind::WestFixed,
        NodeKind::WestHeated,
        NodeKind::WestHeatedCorner,
        NodeKind::StemFixed,
        NodeKind::StemInterior,
        NodeKind::StemBottom,
        NodeKind::NotchFixed,
        NodeKind::NotchWall,
        NodeKind::ReentrantCorner,
        NodeKind::NotchInterior,
        NodeKind::NotchBottom,
        NodeKind::FootTop,
        NodeKind::FootInterior,
        NodeKind::FootBottom,
        NodeKind::EastTopCorner,
        NodeKind::EastEdge,
        NodeKind::EastBottomCorner,
    ];

    /// Classifies the node at `(row, col)`.
    ///
    /// Rows and columns are zero-based; row 0 is the fixed-temperature edge and
    /// column 0 is the heated west edge.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the position lies outside the grid.
    #[must_use]
    pub fn classify(grid: &Grid, row: usize, col: usize) -> Self {
        let mid = grid.mid();
        let last = grid.last();
        debug_assert!(row <= last && col <= last, "node ({row}, {col}) is off the grid");

        if col == 0 {
            match row {
                0 => Self::WestFixed,
                r if r == last => Self::WestHeatedCorner,
                _ => Self::WestHeated,
            }
        } else if col < mid {
            match row {
                0 => Self::StemFixed,
                r if r == last => Self::StemBottom,
                _ => Self::StemInterior,
            }
        } else if col == mid {
            match row {
                0 => Self::NotchFixed,
                r if r < mid => Self::NotchWall,
                r if r == mid => Self::ReentrantCorner,
                r if r == last => Self::NotchBottom,
                _ => Self::NotchInterior,
            }
        } else if col < last {
            match row {
                r if r < mid => Self::CutOut,
                r if r == mid => Self::FootTop,
                r if r == last => Self::FootBottom,
                _ => Self::FootInterior,
            }
        } else {
            match row {
                r if r < mid => Self::CutOut,
                r if r == mid => Self::EastTopCorner,
                r if r == last => Self::EastBottomCorner,
                _ => Self::EastEdge,
            }
        }
    }

    /// Returns `true` for nodes pinned to the surface temperature.
    #[must_use]
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::WestFixed | Self::StemFixed | Self::NotchFixed)
    }

    /// Returns `true` for nodes inside the plate.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::CutOut
    }

    /// Returns `true` for nodes that receive the west-edge heat input.
    #[must_use]
    pub fn is_heated(self) -> bool {
        matches!(self, Self::WestHeated | Self::WestHeatedCorner)
    }

    /// Multiple of `Bi·F0` removed from the diagonal by convection.
    ///
    /// Zero for nodes without a convective face.
    #[must_use]
    pub fn convective_weight(self) -> f64 {
        match self {
            Self::NotchWall | Self::EastTopCorner | Self::EastEdge | Self::EastBottomCorner => 2.0,
            Self::ReentrantCorner => 2.0 / 3.0,
            _ => 0.0,
        }
    }
}
