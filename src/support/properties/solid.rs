use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{MaterialError, normalize_key};

/// Identifier for a heat-sink body material.
///
/// With the `serde` feature it serializes as its [`key`](Self::key) and
/// deserializes through [`FromStr`], so any spelling `parse` accepts is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum SinkMaterial {
    /// Aluminum alloy 6061 in the T6 temper, the usual machined-sink stock.
    #[default]
    Aluminum6061T6,

    /// Aluminum alloy 6063 in the T5 temper, common for extruded sinks.
    Aluminum6063T5,

    /// Commercially pure aluminum 1050.
    Aluminum1050,

    /// Electrolytic tough pitch copper C110.
    CopperC110,
}

impl SinkMaterial {
    /// Every material in the table.
    pub const ALL: [Self; 4] = [
        Self::Aluminum6061T6,
        Self::Aluminum6063T5,
        Self::Aluminum1050,
        Self::CopperC110,
    ];

    /// Returns the canonical lookup key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Aluminum6061T6 => "al-6061-t6",
            Self::Aluminum6063T5 => "al-6063-t5",
            Self::Aluminum1050 => "al-1050",
            Self::CopperC110 => "cu-c110",
        }
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aluminum6061T6 => "Al 6061-T6",
            Self::Aluminum6063T5 => "Al 6063-T5",
            Self::Aluminum1050 => "Al 1050",
            Self::CopperC110 => "Cu C110",
        }
    }

    /// Returns the tabulated properties for this material.
    #[must_use]
    pub fn properties(self) -> MaterialProperties {
        let k = match self {
            Self::Aluminum6061T6 => 167.0,
            Self::Aluminum6063T5 => 209.0,
            Self::Aluminum1050 => 229.0,
            Self::CopperC110 => 388.0,
        };
        MaterialProperties {
            material: self,
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(k),
        }
    }
}

impl fmt::Display for SinkMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SinkMaterial {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|material| material.key() == key)
            .ok_or_else(|| MaterialError::Unknown { key: s.to_owned() })
    }
}

impl TryFrom<String> for SinkMaterial {
    type Error = MaterialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SinkMaterial> for String {
    fn from(material: SinkMaterial) -> Self {
        material.key().to_owned()
    }
}

/// Thermal properties of a homogeneous sink body.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MaterialProperties {
    /// Material the properties belong to.
    pub material: SinkMaterial,

    /// Thermal conductivity.
    pub conductivity: ThermalConductivity,
}

impl MaterialProperties {
    /// Checks that the conductivity is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Conductivity`] if it is zero, negative, or `NaN`.
    pub fn validate(&self) -> Result<(), MaterialError> {
        StrictlyPositive::check(&self.conductivity).map_err(|_| MaterialError::Conductivity {
            material: self.material.name(),
            conductivity: self.conductivity,
        })
    }
}
