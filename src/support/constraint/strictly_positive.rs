use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Grid spacings, material properties, the convection coefficient and the
/// time step all use this constraint.
///
/// # Examples
///
/// ```
/// use twine_conduction::support::constraint::{Constrained, StrictlyPositive};
///
/// let stride = Constrained::<usize, StrictlyPositive>::new(500).unwrap();
/// assert_eq!(stride.into_inner(), 500);
///
/// let k = StrictlyPositive::new(15.1).unwrap();
/// assert_eq!(k.into_inner(), 15.1);
///
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermalConductivity},
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn capture_strides() {
        assert!(Constrained::<usize, StrictlyPositive>::new(1).is_ok());
        assert_eq!(
            StrictlyPositive::new(0_usize).unwrap_err(),
            ConstraintError::Zero
        );
    }

    #[test]
    fn lengths() {
        let dx = StrictlyPositive::new(Length::new::<meter>(0.005)).unwrap();
        assert_eq!(dx.into_inner(), Length::new::<meter>(0.005));

        assert_eq!(
            StrictlyPositive::new(Length::new::<meter>(0.0)).unwrap_err(),
            ConstraintError::Zero
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<meter>(-0.005)).unwrap_err(),
            ConstraintError::Negative
        );
    }

    #[test]
    fn conductivities() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(15.1);
        assert!(StrictlyPositive::new(k).is_ok());

        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(f64::NAN);
        assert_eq!(
            StrictlyPositive::new(k).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
