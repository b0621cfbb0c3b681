use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{DynamicViscosity, MassDensity, Ratio, ThermalConductivity},
    dynamic_viscosity::pascal_second,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{MaterialError, normalize_key};

/// Identifier for a coolant gas.
///
/// Tabulated properties are evaluated at 25 °C and one atmosphere and are
/// treated as constant over a solve.
///
/// Like [`SinkMaterial`](super::SinkMaterial), serde goes through the string
/// key, so `"N2"` deserializes as [`Fluid::Nitrogen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Fluid {
    /// Dry air.
    #[default]
    Air,

    /// Gaseous nitrogen, as used in purged test chambers.
    Nitrogen,
}

impl Fluid {
    /// Every fluid in the table.
    pub const ALL: [Self; 2] = [Self::Air, Self::Nitrogen];

    /// Returns the canonical lookup key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Nitrogen => "nitrogen",
        }
    }

    /// Returns the tabulated properties for this fluid.
    #[must_use]
    pub fn properties(self) -> FluidProperties {
        match self {
            Self::Air => FluidProperties::new(1.184, 1.849e-5, 0.0262, 0.71),
            Self::Nitrogen => FluidProperties::new(1.145, 1.781e-5, 0.0259, 0.716),
        }
    }
}

impl fmt::Display for Fluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Fluid {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        match key.as_str() {
            "air" => Ok(Self::Air),
            "nitrogen" | "n2" => Ok(Self::Nitrogen),
            _ => Err(MaterialError::Unknown { key: s.to_owned() }),
        }
    }
}

impl TryFrom<String> for Fluid {
    type Error = MaterialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fluid> for String {
    fn from(fluid: Fluid) -> Self {
        fluid.key().to_owned()
    }
}

/// Transport properties of the coolant at its reference (film) temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FluidProperties {
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,
    pub prandtl: Ratio,
}

impl FluidProperties {
    /// Creates properties from SI values: kg/m³, Pa·s, W/m·K and the Prandtl number.
    #[must_use]
    pub fn new(density: f64, viscosity: f64, conductivity: f64, prandtl: f64) -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
            prandtl: Ratio::new::<ratio>(prandtl),
        }
    }

    /// Checks that every property is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::FluidProperty`] naming the first invalid property.
    pub fn validate(&self) -> Result<(), MaterialError> {
        fn positive<T: PartialOrd + num_traits::Zero>(
            value: &T,
            property: &'static str,
            si: f64,
        ) -> Result<(), MaterialError> {
            StrictlyPositive::check(value)
                .map_err(|_| MaterialError::FluidProperty { property, value: si })
        }

        positive(&self.density, "density", self.density.value)?;
        positive(&self.viscosity, "dynamic viscosity", self.viscosity.value)?;
        positive(&self.conductivity, "thermal conductivity", self.conductivity.value)?;
        positive(&self.prandtl, "Prandtl number", self.prandtl.value)
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Fluid::default().properties()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn air_matches_reference_values() {
        let air = Fluid::Air.properties();
        assert_relative_eq!(air.density.get::<kilogram_per_cubic_meter>(), 1.184);
        assert_relative_eq!(air.viscosity.get::<pascal_second>(), 1.849e-5);
        assert_relative_eq!(air.conductivity.get::<watt_per_meter_kelvin>(), 0.0262);
        assert_relative_eq!(air.prandtl.get::<ratio>(), 0.71);
        assert_eq!(FluidProperties::default(), air);
    }

    #[test]
    fn parses_keys() {
        for fluid in Fluid::ALL {
            assert_eq!(fluid.key().parse::<Fluid>(), Ok(fluid));
            assert!(fluid.properties().validate().is_ok());
        }
        assert_eq!("N2".parse::<Fluid>(), Ok(Fluid::Nitrogen));
        assert!(matches!(
            "helium".parse::<Fluid>(),
            Err(MaterialError::Unknown { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_property() {
        let mut props = Fluid::Air.properties();
        props.viscosity = DynamicViscosity::new::<pascal_second>(0.0);
        assert_eq!(
            props.validate(),
            Err(MaterialError::FluidProperty {
                property: "dynamic viscosity",
                value: 0.0
            })
        );

        let mut props = Fluid::Air.properties();
        props.prandtl = Ratio::new::<ratio>(f64::NAN);
        assert!(matches!(
            props.validate(),
            Err(MaterialError::FluidProperty {
                property: "Prandtl number",
                ..
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_goes_through_the_key() {
        assert_eq!(serde_json::to_string(&Fluid::Nitrogen).unwrap(), "\"nitrogen\"");
        assert_eq!(serde_json::from_str::<Fluid>("\"n2\"").unwrap(), Fluid::Nitrogen);
        assert_eq!(serde_json::from_str::<Fluid>("\" Air \"").unwrap(), Fluid::Air);

        let err = serde_json::from_str::<Fluid>("\"helium\"").unwrap_err();
        assert!(
            err.to_string()
                .contains("unknown material or fluid identifier"),
            "{err}"
        );
    }
}
