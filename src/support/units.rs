//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, power, temperature).
//! This module provides extensions that are needed for lumped thermal modeling
//! but aren't included in [`uom`].
//!
//! ## Thermal resistance
//!
//! [`ThermalResistance`] is the reciprocal of [`uom`]'s thermal conductance,
//! expressed in K/W (numerically identical to °C/W).
//! The [`KelvinPerWatt`] trait creates and reads it in those units:
//!
//! ```
//! use heatsink_models::support::units::{KelvinPerWatt, ThermalResistance};
//!
//! let r_jc = ThermalResistance::from_kelvin_per_watt(0.1);
//! assert_eq!(r_jc.kelvin_per_watt(), 0.1);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use heatsink_models::support::units::TemperatureDifference;
//!
//! let junction = ThermodynamicTemperature::new::<degree_celsius>(80.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let rise = junction.minus(ambient);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod temperature_difference;
mod thermal_resistance;

pub use temperature_difference::TemperatureDifference;
pub use thermal_resistance::{KelvinPerWatt, ThermalResistance};
