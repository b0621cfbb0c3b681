#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::f64::{Power, Ratio, TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::TemperatureDifference;

use super::{Convection, DerivedGeometry, ResistanceBreakdown};

/// Junction temperature and the resistance network that produced it.
///
/// `junction_temperature - ambient_temperature == power × total resistance`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SolverResult {
    breakdown: ResistanceBreakdown,
    power: Power,
    ambient_temperature: ThermodynamicTemperature,
    junction_temperature: ThermodynamicTemperature,
}

impl SolverResult {
    pub(super) fn new(
        breakdown: ResistanceBreakdown,
        power: Power,
        ambient_temperature: ThermodynamicTemperature,
        junction_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            breakdown,
            power,
            ambient_temperature,
            junction_temperature,
        }
    }

    #[must_use]
    pub fn breakdown(&self) -> &ResistanceBreakdown {
        &self.breakdown
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    #[must_use]
    pub fn ambient_temperature(&self) -> ThermodynamicTemperature {
        self.ambient_temperature
    }

    #[must_use]
    pub fn junction_temperature(&self) -> ThermodynamicTemperature {
        self.junction_temperature
    }

    /// Rise of the junction above ambient.
    #[must_use]
    pub fn temperature_rise(&self) -> TemperatureInterval {
        self.junction_temperature.minus(self.ambient_temperature)
    }

    /// Temperature at the package case, below the junction-to-case resistance.
    #[must_use]
    pub fn case_temperature(&self) -> ThermodynamicTemperature {
        let below_case = self.breakdown.tim() + self.breakdown.heat_sink();
        self.ambient_temperature + self.power * below_case
    }

    /// Temperature of the sink base, the lumped node above the heat-sink resistance.
    #[must_use]
    pub fn sink_base_temperature(&self) -> ThermodynamicTemperature {
        self.ambient_temperature + self.power * self.breakdown.heat_sink()
    }
}

/// Full output of a forward solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Analysis {
    pub result: SolverResult,

    /// Regime and correlation values from the convection stage.
    pub convection: Convection,

    /// Efficiency of a single fin; reported only, not applied to the network.
    pub fin_efficiency: Ratio,

    pub geometry: DerivedGeometry,
}
