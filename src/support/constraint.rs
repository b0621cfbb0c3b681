//! Numeric constraints checked at construction time.
//!
//! Every stage of the heat-sink model validates its inputs before doing any
//! arithmetic that could divide by zero or produce a non-physical result.
//! The markers in this module give those checks a single shape:
//!
//! - [`StrictlyPositive`]: greater than zero (dimensions, conductivities, velocity)
//! - [`NonNegative`]: zero or greater (power, TIM thickness, resistances)
//!
//! Both reject `NaN`. A marker can be used on its own through
//! [`Constraint::check`], or with the [`Constrained<T, C>`] wrapper to carry
//! the guarantee in the type.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use heatsink_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let fin_height = Constrained::<_, StrictlyPositive>::new(Length::new::<millimeter>(35.0)).unwrap();
/// assert_eq!(fin_height.into_inner().get::<millimeter>(), 35.0);
/// ```
///
/// Stage functions take constrained arguments where a derived quantity has
/// already been validated upstream, so the check is not repeated.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}
