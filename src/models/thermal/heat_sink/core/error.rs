use thiserror::Error;
use uom::si::f64::{Area, Length, Power, Velocity};

use crate::support::{properties::MaterialError, units::ThermalResistance};

/// Errors that can occur while solving the heat-sink resistance network.
///
/// Every failure is a deterministic function of the input: the same input
/// always produces the same error, so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A dimension is non-positive, there are too few fins, or the fins do not
    /// fit within the sink width.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    /// A material or fluid is unknown or has a non-positive property.
    #[error("invalid material: {0}")]
    InvalidMaterial(#[from] MaterialError),

    /// The airflow or power is outside the modeled operating range.
    #[error("invalid operating condition: {0}")]
    InvalidOperatingCondition(#[from] OperatingConditionError),

    /// A resistance in the network left its physical domain despite
    /// validated inputs.
    #[error("numeric domain violation: {0}")]
    NumericDomain(#[from] NumericDomainError),
}

/// Geometry validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("{dimension} must be positive, got {value:?}")]
    NonPositiveLength {
        dimension: &'static str,
        value: Length,
    },

    #[error("{dimension} must not be negative, got {value:?}")]
    NegativeLength {
        dimension: &'static str,
        value: Length,
    },

    #[error("{dimension} must be positive, got {value:?}")]
    NonPositiveArea {
        dimension: &'static str,
        value: Area,
    },

    /// Spacing is undefined for a single fin.
    #[error("at least 2 fins are required, got {fin_count}")]
    TooFewFins { fin_count: u32 },

    /// The fins occupy the entire sink width (or more).
    #[error("fins do not fit within the sink width: spacing would be {spacing:?}")]
    NonPositiveFinSpacing { spacing: Length },
}

/// Operating-condition validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OperatingConditionError {
    /// The Reynolds number is undefined without flow.
    #[error("free-stream velocity must be positive, got {velocity:?}")]
    NonPositiveVelocity { velocity: Velocity },

    #[error("dissipated power must not be negative, got {power:?}")]
    NegativePower { power: Power },

    #[error("convective area must be positive, got {area:?}")]
    NonPositiveConvectiveArea { area: Area },
}

/// Resistance-network domain failures.
///
/// Upstream validation should make these unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumericDomainError {
    #[error("{component} resistance must be a non-negative number, got {value:?}")]
    InvalidResistance {
        component: &'static str,
        value: ThermalResistance,
    },

    #[error("total resistance must be positive, got {total:?}")]
    NonPositiveTotal { total: ThermalResistance },
}
