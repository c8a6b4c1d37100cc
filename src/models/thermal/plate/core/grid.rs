//! Node numbering for the square grid that encloses the plate.

use uom::si::f64::Length;

/// Square grid of `n × n` nodes with uniform spacing.
///
/// Nodes are numbered column-major: `index = col · n + row`, so the index
/// increases down a column first. Row 0 is the fixed-temperature edge and
/// column 0 is the west edge (x = 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    nodes: usize,
    spacing: Length,
}

impl Grid {
    /// Creates a grid with `nodes` nodes per side.
    ///
    /// Callers are expected to pass an odd count of at least 5, which
    /// [`Geometry`](super::Geometry) guarantees.
    pub(crate) fn new(nodes: usize, spacing: Length) -> Self {
        debug_assert!(nodes >= 5 && nodes % 2 == 1, "unsupported node count {nodes}");
        Self { nodes, spacing }
    }

    /// Number of nodes per side.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Total number of nodes, including the cut-out.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes * self.nodes
    }

    /// Zero-based index of the midline row and column.
    #[must_use]
    pub fn mid(&self) -> usize {
        self.nodes / 2
    }

    /// Zero-based index of the last row and column.
    #[must_use]
    pub fn last(&self) -> usize {
        self.nodes - 1
    }

    /// Node spacing in both directions.
    #[must_use]
    pub fn spacing(&self) -> Length {
        self.spacing
    }

    /// Column-major index of the node at `(row, col)`.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        col * self.nodes + row
    }

    /// `(row, col)` of the node at `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.nodes, index / self.nodes)
    }

    /// Returns `true` if `(row, col)` lies in the cut-out quadrant.
    #[must_use]
    pub fn is_cut_out(&self, row: usize, col: usize) -> bool {
        row < self.mid() && col > self.mid()
    }

    /// Distance of column `col` from the west edge.
    #[must_use]
    pub fn x(&self, col: usize) -> Length {
        #[allow(clippy::cast_precision_loss)]
        let col = col as f64;
        self.spacing * col
    }

    /// Distance of row `row` from the fixed-temperature edge.
    #[must_use]
    pub fn y(&self, row: usize) -> Length {
        #[allow(clippy::cast_precision_loss)]
        let row = row as f64;
        self.spacing * row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{meter, millimeter};

    #[test]
    fn column_major_numbering() {
        let grid = Grid::new(41, Length::new::<millimeter>(5.0));
        assert_eq!(grid.size(), 1681);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(1, 0), 1);
        assert_eq!(grid.index(0, 1), 41);
        assert_eq!(grid.index(40, 40), 1680);

        for index in [0, 1, 40, 41, 860, 1680] {
            let (row, col) = grid.position(index);
            assert_eq!(grid.index(row, col), index);
        }
    }

    #[test]
    fn cut_out_is_upper_right_quadrant() {
        let grid = Grid::new(41, Length::new::<millimeter>(5.0));
        assert!(grid.is_cut_out(0, 21));
        assert!(grid.is_cut_out(19, 40));
        assert!(!grid.is_cut_out(20, 40));
        assert!(!grid.is_cut_out(0, 20));
        assert!(!grid.is_cut_out(40, 0));
    }

    #[test]
    fn coordinates_span_the_side_length() {
        let grid = Grid::new(41, Length::new::<millimeter>(5.0));
        assert_relative_eq!(grid.x(0).get::<meter>(), 0.0);
        assert_relative_eq!(grid.x(40).get::<meter>(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(grid.y(20).get::<meter>(), 0.1, epsilon = 1e-12);
    }
}
