use thiserror::Error;
use uom::si::f64::ThermalConductivity;

/// Errors raised by material and fluid property lookup or validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    /// The identifier does not name an entry in the property tables.
    #[error("unknown material or fluid identifier: {key:?}")]
    Unknown { key: String },

    /// A solid's thermal conductivity is zero, negative, or `NaN`.
    #[error("thermal conductivity of {material} must be positive, got {conductivity:?}")]
    Conductivity {
        material: &'static str,
        conductivity: ThermalConductivity,
    },

    /// A fluid property is zero, negative, or `NaN`.
    #[error("fluid {property} must be positive, got {value} (SI)")]
    FluidProperty { property: &'static str, value: f64 },
}
