#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Power, ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::{
    properties::{FluidProperties, SinkMaterial},
    units::{KelvinPerWatt, ThermalResistance},
};

use super::{HeatSinkGeometry, TimLayer};

/// Junction-to-case resistance used when the caller does not supply one, in K/W.
pub const DEFAULT_JUNCTION_TO_CASE: f64 = 0.1;

/// Everything needed for one forward solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeatSinkInput {
    /// Heat dissipated at the junction.
    pub power: Power,

    /// Sink body material.
    pub material: SinkMaterial,

    pub geometry: HeatSinkGeometry,
    pub airflow: Airflow,

    /// Coolant properties at the film temperature.
    pub fluid: FluidProperties,

    pub tim: TimLayer,

    /// Package junction-to-case resistance.
    ///
    /// `None` selects [`DEFAULT_JUNCTION_TO_CASE`].
    pub junction_to_case: Option<ThermalResistance>,
}

impl HeatSinkInput {
    /// Returns the junction-to-case resistance, falling back to the default.
    #[must_use]
    pub fn junction_to_case(&self) -> ThermalResistance {
        self.junction_to_case
            .unwrap_or_else(|| ThermalResistance::from_kelvin_per_watt(DEFAULT_JUNCTION_TO_CASE))
    }
}

/// Forced-air operating condition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airflow {
    /// Free-stream velocity approaching the fin channels.
    pub velocity: Velocity,
    pub ambient_temperature: ThermodynamicTemperature,
}

impl Airflow {
    /// Creates an airflow condition from a velocity in m/s and an ambient in °C.
    #[must_use]
    pub fn new(velocity: f64, ambient_celsius: f64) -> Self {
        Self {
            velocity: Velocity::new::<meter_per_second>(velocity),
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(ambient_celsius),
        }
    }
}

impl Default for Airflow {
    /// 1 m/s of 25 °C air.
    fn default() -> Self {
        Self::new(1.0, 25.0)
    }
}
