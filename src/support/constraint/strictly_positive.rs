use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Geometry dimensions, conductivities, fluid properties and the free-stream
/// velocity are all checked against this marker.
///
/// # Examples
///
/// ```
/// use heatsink_models::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.002).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
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
        f64::{Length, Velocity},
        length::millimeter,
        velocity::meter_per_second,
    };

    #[test]
    fn lengths() {
        let fin = Length::new::<millimeter>(0.8);
        assert_eq!(StrictlyPositive::new(fin).unwrap().into_inner(), fin);

        assert_eq!(
            StrictlyPositive::check(&Length::new::<millimeter>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::check(&Length::new::<millimeter>(-2.5)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn velocities() {
        assert!(StrictlyPositive::new(Velocity::new::<meter_per_second>(1.0)).is_ok());
        assert_eq!(
            StrictlyPositive::check(&Velocity::new::<meter_per_second>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
