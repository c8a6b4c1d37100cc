//! Temperature field over the grid.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{Conditions, Grid, NodeKind, SolveError};

/// Nodal temperatures in kelvin, stored column-major like the [`Grid`].
///
/// Cut-out nodes hold NaN and are never read by the update.
#[derive(Debug, Clone)]
pub struct Field {
    grid: Grid,
    values: Vec<f64>,
}

impl Field {
    /// Builds the starting field.
    ///
    /// The fixed row and the upper west edge (rows `0..=mid` of column 0)
    /// start at the surface temperature; every other plate node starts at the
    /// initial temperature. Only row 0 stays pinned once marching begins.
    #[must_use]
    pub fn initial(grid: Grid, conditions: &Conditions) -> Self {
        let surface = conditions.surface().get::<kelvin>();
        let initial = conditions.initial().get::<kelvin>();

        let values = (0..grid.size())
            .map(|index| {
                let (row, col) = grid.position(index);
                let kind = NodeKind::classify(&grid, row, col);
                if !kind.is_active() {
                    f64::NAN
                } else if kind.is_fixed() || (col == 0 && row <= grid.mid()) {
                    surface
                } else {
                    initial
                }
            })
            .collect();

        Self { grid, values }
    }

    /// Builds a field with every plate node at `temperature`.
    #[must_use]
    pub fn uniform(grid: Grid, temperature: ThermodynamicTemperature) -> Self {
        let value = temperature.get::<kelvin>();
        let values = (0..grid.size())
            .map(|index| {
                let (row, col) = grid.position(index);
                if grid.is_cut_out(row, col) { f64::NAN } else { value }
            })
            .collect();

        Self { grid, values }
    }

    /// Wraps column-major kelvin values.
    ///
    /// Cut-out entries are overwritten with NaN.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::FieldMismatch`] if `values` does not hold one
    /// entry per grid node.
    pub fn from_values(grid: Grid, mut values: Vec<f64>) -> Result<Self, SolveError> {
        if values.len() != grid.size() {
            return Err(SolveError::FieldMismatch {
                expected: grid.size(),
                found: values.len(),
            });
        }
        for (index, value) in values.iter_mut().enumerate() {
            let (row, col) = grid.position(index);
            if grid.is_cut_out(row, col) {
                *value = f64::NAN;
            }
        }
        Ok(Self { grid, values })
    }

    /// Grid the field is defined on.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Raw column-major values in kelvin.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(super) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Temperature at `(row, col)`, or `None` off the plate.
    #[must_use]
    pub fn temperature(&self, row: usize, col: usize) -> Option<ThermodynamicTemperature> {
        let n = self.grid.nodes();
        if row >= n || col >= n || self.grid.is_cut_out(row, col) {
            return None;
        }
        Some(ThermodynamicTemperature::new::<kelvin>(
            self.values[self.grid.index(row, col)],
        ))
    }

    /// Row-major matrix of kelvin values for plotting.
    ///
    /// Row 0 is the fixed-temperature edge and column 0 is the west edge.
    /// Cut-out entries are `None`.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.grid.nodes();
        (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| {
                        (!self.grid.is_cut_out(row, col))
                            .then(|| self.values[self.grid.index(row, col)])
                    })
                    .collect()
            })
            .collect()
    }

    /// Hottest plate node, or `None` if any plate node is NaN.
    #[must_use]
    pub fn max_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.plate_values()
            .try_fold(f64::NEG_INFINITY, |max, value| {
                (!value.is_nan()).then_some(max.max(value))
            })
            .map(ThermodynamicTemperature::new::<kelvin>)
    }

    /// Coldest plate node, or `None` if any plate node is NaN.
    #[must_use]
    pub fn min_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.plate_values()
            .try_fold(f64::INFINITY, |min, value| {
                (!value.is_nan()).then_some(min.min(value))
            })
            .map(ThermodynamicTemperature::new::<kelvin>)
    }

    /// Values of plate nodes, skipping the cut-out.
    fn plate_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().enumerate().filter_map(|(index, &value)| {
            let (row, col) = self.grid.position(index);
            (!self.grid.is_cut_out(row, col)).then_some(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::plate::core::Geometry;

    #[test]
    fn initial_field_pins_fixed_row() {
        let grid = Geometry::default().grid();
        let field = Field::initial(grid, &Conditions::default());

        let at = |row, col| field.temperature(row, col).map(|t| t.get::<kelvin>());
        assert_eq!(at(0, 0), Some(400.0));
        assert_eq!(at(0, 20), Some(400.0));
        assert_eq!(at(1, 1), Some(300.0));
        assert_eq!(at(40, 40), Some(300.0));
        assert_eq!(at(0, 21), None);
        assert_eq!(at(41, 0), None);

        assert_relative_eq!(
            field.max_temperature().map(|t| t.get::<kelvin>()).unwrap_or_default(),
            400.0
        );
        assert_relative_eq!(
            field.min_temperature().map(|t| t.get::<kelvin>()).unwrap_or_default(),
            300.0
        );
    }

    #[test]
    fn initial_field_starts_upper_west_edge_at_surface() {
        let grid = Geometry::default().grid();
        let field = Field::initial(grid, &Conditions::default());
        let at = |row, col| field.temperature(row, col).map(|t| t.get::<kelvin>());

        for row in 0..=grid.mid() {
            assert_eq!(at(row, 0), Some(400.0), "west edge row {row}");
        }
        assert_eq!(at(grid.mid() + 1, 0), Some(300.0));
        assert_eq!(at(grid.last(), 0), Some(300.0));

        // The notch column starts like the rest of the stem.
        assert_eq!(at(1, grid.mid()), Some(300.0));
        assert_eq!(at(grid.mid(), grid.mid()), Some(300.0));
    }

    #[test]
    fn rows_are_masked_and_row_major() {
        let grid = Geometry::default().grid();
        let field = Field::initial(grid, &Conditions::default());
        let rows = field.to_rows();

        assert_eq!(rows.len(), 41);
        assert!(rows.iter().all(|row| row.len() == 41));
        assert_eq!(rows[0][0], Some(400.0));
        assert_eq!(rows[0][21], None);
        assert_eq!(rows[19][40], None);
        assert_eq!(rows[20][40], Some(300.0));

        let masked = rows.iter().flatten().filter(|value| value.is_none()).count();
        assert_eq!(masked, 20 * 20);
    }

    #[test]
    fn from_values_checks_length_and_masks_cut_out() {
        let grid = Geometry::default().grid();

        let err = Field::from_values(grid, vec![300.0; 10]).unwrap_err();
        assert!(matches!(
            err,
            SolveError::FieldMismatch {
                expected: 1681,
                found: 10
            }
        ));

        let field = Field::from_values(grid, vec![320.0; grid.size()]).expect("sized field");
        assert!(field.values()[grid.index(0, 40)].is_nan());
        assert_eq!(field.values()[grid.index(20, 40)], 320.0);
    }

    #[test]
    fn uniform_field_ignores_cut_out_for_extremes() {
        let grid = Geometry::default().grid();
        let field = Field::uniform(grid, ThermodynamicTemperature::new::<kelvin>(310.0));

        assert_eq!(field.max_temperature(), field.min_temperature());
        assert_relative_eq!(
            field.max_temperature().map(|t| t.get::<kelvin>()).unwrap_or_default(),
            310.0
        );
    }
}
