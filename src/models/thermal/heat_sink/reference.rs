//! Frozen benchmark for regression checks.
//!
//! The benchmark is a 13-fin Al 6061-T6 sink dissipating 150 W into 1 m/s of
//! 25 °C air. It isolates the heat-sink resistance: the die sits on the base
//! without interface material and the junction-to-case term is zeroed, so the
//! junction rise is `Q·R_hs` alone.
//!
//! ```
//! use heatsink_models::models::thermal::heat_sink::reference::ReferenceCase;
//!
//! let check = ReferenceCase::benchmark().run().unwrap();
//! assert!(check.passed);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{
    area::square_millimeter,
    f64::{Area, Length, Power, Ratio, ThermodynamicTemperature},
    length::millimeter,
    power::watt,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    properties::{Fluid, SinkMaterial},
    units::{KelvinPerWatt, ThermalResistance},
};

use super::{Airflow, HeatSinkGeometry, HeatSinkInput, SolveError, SolverResult, TimLayer};

/// A recorded operating point and the values it must reproduce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCase {
    pub input: HeatSinkInput,
    pub heat_sink_resistance: ThermalResistance,
    pub junction_temperature: ThermodynamicTemperature,

    /// Largest relative deviation accepted for either value.
    pub tolerance: Ratio,
}

/// Outcome of comparing a result against a [`ReferenceCase`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ReferenceCheck {
    /// `|R_hs - R_hs,ref| / R_hs,ref`
    pub heat_sink_deviation: Ratio,

    /// `|T_j - T_j,ref| / T_j,ref`, on the Celsius scale.
    pub junction_deviation: Ratio,

    /// Whether both deviations are within the tolerance.
    pub passed: bool,
}

impl ReferenceCase {
    /// The published benchmark.
    #[must_use]
    pub fn benchmark() -> Self {
        let input = HeatSinkInput {
            power: Power::new::<watt>(150.0),
            material: SinkMaterial::Aluminum6061T6,
            geometry: HeatSinkGeometry {
                sink_width: Length::new::<millimeter>(100.0),
                sink_length: Length::new::<millimeter>(100.0),
                base_thickness: Length::new::<millimeter>(3.0),
                fin_thickness: Length::new::<millimeter>(1.5),
                fin_height: Length::new::<millimeter>(50.0),
                fin_length: Length::new::<millimeter>(100.0),
                fin_count: 13,
                die_contact_area: Area::new::<square_millimeter>(40.0 * 40.0),
            },
            airflow: Airflow::new(1.0, 25.0),
            fluid: Fluid::Air.properties(),
            tim: TimLayer::bare_contact(),
            junction_to_case: Some(ThermalResistance::from_kelvin_per_watt(0.0)),
        };

        Self {
            input,
            heat_sink_resistance: ThermalResistance::from_kelvin_per_watt(0.373_043),
            junction_temperature: ThermodynamicTemperature::new::<degree_celsius>(80.956_52),
            tolerance: Ratio::new::<percent>(1.0),
        }
    }

    /// Compares a result against the recorded values.
    #[must_use]
    pub fn check(&self, result: &SolverResult) -> ReferenceCheck {
        let heat_sink_deviation = relative_deviation(
            result.breakdown().heat_sink().kelvin_per_watt(),
            self.heat_sink_resistance.kelvin_per_watt(),
        );
        let junction_deviation = relative_deviation(
            result.junction_temperature().get::<degree_celsius>(),
            self.junction_temperature.get::<degree_celsius>(),
        );

        let passed = heat_sink_deviation <= self.tolerance && junction_deviation <= self.tolerance;

        ReferenceCheck {
            heat_sink_deviation,
            junction_deviation,
            passed,
        }
    }

    /// Solves the recorded input and checks the result.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the recorded input fails to solve.
    pub fn run(&self) -> Result<ReferenceCheck, SolveError> {
        let analysis = super::core::solve(&self.input)?;
        Ok(self.check(&analysis.result))
    }
}

fn relative_deviation(actual: f64, expected: f64) -> Ratio {
    Ratio::new::<ratio>(((actual - expected) / expected).abs())
}
