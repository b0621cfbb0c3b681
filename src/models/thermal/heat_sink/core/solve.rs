use tracing::debug;
use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::KelvinPerWatt,
};

use super::{
    Analysis, HeatSinkInput, OperatingConditionError, ResistanceBreakdown, SolveError,
    SolverResult, conduction_resistance, convection, fin_efficiency, tim_resistance,
};

/// Solves the junction-to-ambient resistance network for one operating point.
///
/// Stages run strictly forward: geometry, then the TIM, conduction and
/// convection resistances, then the network and the junction temperature.
/// Each stage validates its own inputs, so the first invalid value stops
/// the solve.
///
/// # Errors
///
/// Returns a [`SolveError`] naming the first stage that rejected the input.
pub fn solve(input: &HeatSinkInput) -> Result<Analysis, SolveError> {
    let geometry = input.geometry.derive()?;
    let material = input.material.properties();

    let tim = tim_resistance(&input.tim, geometry.die_contact_area())?;
    let conduction = conduction_resistance(
        geometry.base_thickness(),
        &material,
        geometry.conduction_area(),
    )?;
    let convection = convection(
        input.airflow.velocity,
        &input.fluid,
        geometry.hydraulic_diameter(),
        geometry.fin_height(),
        geometry.convective_area().into_inner(),
    )?;

    let breakdown =
        ResistanceBreakdown::new(input.junction_to_case(), tim, conduction, convection.resistance)?;

    debug!(
        material = material.material.name(),
        r_jc = breakdown.junction_to_case().kelvin_per_watt(),
        r_tim = breakdown.tim().kelvin_per_watt(),
        r_cond = breakdown.conduction().kelvin_per_watt(),
        r_conv = breakdown.convection().kelvin_per_watt(),
        r_total = breakdown.total().kelvin_per_watt(),
        "resolved resistance network"
    );

    let power = NonNegative::new(input.power).map_err(|_| {
        OperatingConditionError::NegativePower { power: input.power }
    })?;
    let result = junction_temperature(power, input.airflow.ambient_temperature, breakdown);

    let fin_efficiency = fin_efficiency(
        convection.heat_transfer_coefficient,
        material.conductivity,
        geometry.fin_thickness().into_inner(),
        geometry.fin_height().into_inner(),
    );

    Ok(Analysis {
        result,
        convection,
        fin_efficiency,
        geometry,
    })
}

/// Computes `T_j = T_amb + Q·R_total`.
///
/// The power is constrained non-negative, so the junction never sits below
/// ambient.
#[must_use]
pub fn junction_temperature(
    power: Constrained<Power, NonNegative>,
    ambient_temperature: ThermodynamicTemperature,
    breakdown: ResistanceBreakdown,
) -> SolverResult {
    let power = power.into_inner();
    let rise: TemperatureInterval = power * breakdown.total();
    let junction_temperature = ambient_temperature + rise;

    debug!(
        power = power.get::<watt>(),
        ambient = ambient_temperature.get::<degree_celsius>(),
        junction = junction_temperature.get::<degree_celsius>(),
        "solved junction temperature"
    );

    SolverResult::new(breakdown, power, ambient_temperature, junction_temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Velocity},
        length::meter,
        ratio::ratio,
        temperature_interval::kelvin as delta_kelvin,
        velocity::meter_per_second,
    };

    use crate::{
        models::thermal::heat_sink::core::{
            FlowRegime, GeometryError, HeatSinkGeometry, TimLayer, test_support::compact_input,
        },
        support::{
            properties::{Fluid, SinkMaterial},
            units::{TemperatureDifference, ThermalResistance},
        },
    };

    #[test]
    fn compact_design_operating_point() {
        let analysis = solve(&compact_input()).unwrap();
        let result = &analysis.result;
        let breakdown = result.breakdown();

        assert_eq!(analysis.convection.regime, FlowRegime::Laminar);
        assert_relative_eq!(
            analysis.convection.reynolds.get::<ratio>(),
            140.97,
            max_relative = 1e-4
        );

        assert_relative_eq!(breakdown.tim().kelvin_per_watt(), 0.010_582, max_relative = 1e-4);
        assert_relative_eq!(
            breakdown.conduction().kelvin_per_watt(),
            0.001_433_9,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            breakdown.convection().kelvin_per_watt(),
            0.082_098_3,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            breakdown.heat_sink().kelvin_per_watt(),
            0.083_532_3,
            max_relative = 1e-5
        );
        assert_relative_eq!(breakdown.total().kelvin_per_watt(), 0.194_114_3, max_relative = 1e-5);

        assert_relative_eq!(
            result.junction_temperature().get::<degree_celsius>(),
            54.117_14,
            max_relative = 1e-6
        );
        assert_relative_eq!(analysis.fin_efficiency.get::<ratio>(), 0.881_66, max_relative = 1e-5);
    }

    #[test]
    fn is_deterministic() {
        let input = compact_input();
        assert_eq!(solve(&input).unwrap(), solve(&input).unwrap());
    }

    #[test]
    fn total_is_sum_of_components() {
        let analysis = solve(&compact_input()).unwrap();
        let b = analysis.result.breakdown();

        assert_eq!(b.heat_sink(), b.conduction() + b.convection());
        assert_eq!(b.total(), b.junction_to_case() + b.tim() + b.heat_sink());
    }

    #[test]
    fn junction_rise_is_power_times_total_resistance() {
        for watts in [1.0, 65.0, 150.0, 400.0] {
            let input = HeatSinkInput {
                power: Power::new::<watt>(watts),
                ..compact_input()
            };
            let result = solve(&input).unwrap().result;

            let expected: TemperatureInterval = result.power() * result.breakdown().total();
            assert_relative_eq!(
                result.temperature_rise().get::<delta_kelvin>(),
                expected.get::<delta_kelvin>(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn zero_power_leaves_junction_at_ambient() {
        let input = HeatSinkInput {
            power: Power::new::<watt>(0.0),
            ..compact_input()
        };
        let result = solve(&input).unwrap().result;

        assert_eq!(result.junction_temperature(), result.ambient_temperature());
        assert_eq!(result.sink_base_temperature(), result.ambient_temperature());
    }

    #[test]
    fn node_temperatures_fall_along_the_chain() {
        let result = solve(&compact_input()).unwrap().result;

        let junction = result.junction_temperature();
        let case = result.case_temperature();
        let base = result.sink_base_temperature();
        let ambient = result.ambient_temperature();

        assert!(junction > case && case > base && base > ambient);

        let b = result.breakdown();
        assert_relative_eq!(
            junction.minus(case).get::<delta_kelvin>(),
            150.0 * b.junction_to_case().kelvin_per_watt(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            base.minus(ambient).get::<delta_kelvin>(),
            150.0 * b.heat_sink().kelvin_per_watt(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn junction_to_case_override() {
        let input = HeatSinkInput {
            junction_to_case: Some(ThermalResistance::from_kelvin_per_watt(0.25)),
            ..compact_input()
        };
        let overridden = solve(&input).unwrap().result;
        let default = solve(&compact_input()).unwrap().result;

        assert_relative_eq!(overridden.breakdown().junction_to_case().kelvin_per_watt(), 0.25);
        assert_relative_eq!(
            overridden
                .junction_temperature()
                .minus(default.junction_temperature())
                .get::<delta_kelvin>(),
            150.0 * 0.15,
            max_relative = 1e-9
        );
    }

    #[test]
    fn bare_contact_drops_tim_term() {
        let input = HeatSinkInput {
            tim: TimLayer::bare_contact(),
            ..compact_input()
        };
        let result = solve(&input).unwrap().result;
        assert_eq!(result.breakdown().tim().kelvin_per_watt(), 0.0);
    }

    #[test]
    fn copper_sink_runs_cooler() {
        let copper = HeatSinkInput {
            material: SinkMaterial::CopperC110,
            ..compact_input()
        };
        let aluminum = solve(&compact_input()).unwrap().result;
        let copper = solve(&copper).unwrap().result;

        assert!(copper.junction_temperature() < aluminum.junction_temperature());
        // Only conduction depends on the sink conductivity.
        assert_eq!(copper.breakdown().convection(), aluminum.breakdown().convection());
    }

    #[test]
    fn nitrogen_coolant() {
        let input = HeatSinkInput {
            fluid: Fluid::Nitrogen.properties(),
            ..compact_input()
        };
        assert!(solve(&input).is_ok());
    }

    #[test]
    fn single_fin_is_invalid_geometry() {
        let input = HeatSinkInput {
            geometry: HeatSinkGeometry {
                fin_count: 1,
                ..compact_input().geometry
            },
            ..compact_input()
        };
        assert_eq!(
            solve(&input),
            Err(SolveError::InvalidGeometry(GeometryError::TooFewFins {
                fin_count: 1
            }))
        );
    }

    #[test]
    fn zero_velocity_is_invalid_operating_condition() {
        let mut input = compact_input();
        input.airflow.velocity = Velocity::new::<meter_per_second>(0.0);

        assert!(matches!(
            solve(&input),
            Err(SolveError::InvalidOperatingCondition(
                OperatingConditionError::NonPositiveVelocity { .. }
            ))
        ));
    }

    #[test]
    fn negative_power_is_invalid_operating_condition() {
        let input = HeatSinkInput {
            power: Power::new::<watt>(-10.0),
            ..compact_input()
        };
        assert!(matches!(
            solve(&input),
            Err(SolveError::InvalidOperatingCondition(
                OperatingConditionError::NegativePower { .. }
            ))
        ));
    }

    #[test]
    fn laminar_film_coefficient_ignores_fin_length() {
        let longer = HeatSinkInput {
            geometry: HeatSinkGeometry {
                fin_length: Length::new::<meter>(0.18),
                ..compact_input().geometry
            },
            ..compact_input()
        };
        let base = solve(&compact_input()).unwrap();
        let longer = solve(&longer).unwrap();

        assert_eq!(longer.convection.regime, FlowRegime::Laminar);
        assert_eq!(
            longer.convection.heat_transfer_coefficient,
            base.convection.heat_transfer_coefficient
        );
        // Twice the wetted area at the same film coefficient.
        assert_relative_eq!(
            longer.result.breakdown().convection().kelvin_per_watt(),
            base.result.breakdown().convection().kelvin_per_watt() / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn junction_temperature_from_constrained_power() {
        let breakdown = ResistanceBreakdown::new(
            ThermalResistance::from_kelvin_per_watt(0.1),
            ThermalResistance::from_kelvin_per_watt(0.01),
            ThermalResistance::from_kelvin_per_watt(0.002),
            ThermalResistance::from_kelvin_per_watt(0.088),
        )
        .unwrap();
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let power = NonNegative::new(Power::new::<watt>(100.0)).unwrap();

        let result = junction_temperature(power, ambient, breakdown);
        assert_relative_eq!(
            result.junction_temperature().get::<degree_celsius>(),
            45.0,
            max_relative = 1e-12
        );

        assert!(NonNegative::new(Power::new::<watt>(-1.0)).is_err());
    }

    #[test]
    fn geometry_errors_surface_before_later_stages() {
        let mut input = compact_input();
        input.geometry.base_thickness = Length::new::<meter>(0.0);
        input.airflow.velocity = Velocity::new::<meter_per_second>(0.0);

        assert!(matches!(
            solve(&input),
            Err(SolveError::InvalidGeometry(GeometryError::NonPositiveLength {
                dimension: "base thickness",
                ..
            }))
        ));
    }
}
