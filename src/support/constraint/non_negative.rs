use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used for quantities where zero is meaningful, such as a convergence
/// tolerance (zero makes the tolerance unreachable) or a simulated end time.
///
/// # Examples
///
/// ```
/// use twine_conduction::support::constraint::{Constrained, NonNegative};
///
/// let tol = Constrained::<_, NonNegative>::new(1e-4).unwrap();
/// assert_eq!(tol.into_inner(), 1e-4);
///
/// let none = NonNegative::new(0.0).unwrap();
/// assert_eq!(none.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-1e-4).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{TemperatureInterval, Time},
        temperature_interval::kelvin,
        time::second,
    };

    #[test]
    fn tolerances() {
        let tol = NonNegative::new(TemperatureInterval::new::<kelvin>(1e-4)).unwrap();
        assert_eq!(tol.as_ref().get::<kelvin>(), 1e-4);

        let unreachable = NonNegative::new(TemperatureInterval::new::<kelvin>(0.0)).unwrap();
        assert_eq!(unreachable.into_inner().get::<kelvin>(), 0.0);

        assert_eq!(
            NonNegative::new(TemperatureInterval::new::<kelvin>(-1e-4)).unwrap_err(),
            ConstraintError::Negative
        );
    }

    #[test]
    fn end_times() {
        assert!(NonNegative::new(Time::new::<second>(0.0)).is_ok());
        assert_eq!(
            NonNegative::new(Time::new::<second>(f64::NAN)).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
