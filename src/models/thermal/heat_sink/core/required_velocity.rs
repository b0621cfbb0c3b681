//! Inverse sizing: the slowest airflow that holds the junction at a target.
//!
//! Junction temperature falls monotonically with velocity within each flow
//! regime, but the switch from Sieder–Tate to Dittus–Boelter at the
//! transition velocity can move it either way. The search therefore walks
//! the regimes from slow to fast and bisects inside the first one whose
//! fastest flow meets the target. When the target falls inside a drop at the
//! transition, the result is the first turbulent operating point.

mod config;
mod error;
mod problem;

pub use config::RequiredVelocityConfig;
pub use error::RequiredVelocityError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, Velocity},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{Analysis, HeatSinkInput, SolveError, transition_velocity};

use problem::{RequiredVelocityProblem, VelocityModel};

/// Finds the minimum free-stream velocity at which the junction temperature
/// does not exceed `target`.
///
/// The velocity in `input.airflow` is ignored. Returns the forward solve at
/// the found velocity; if the target is already met at
/// [`RequiredVelocityConfig::min_velocity`], that solve is returned as is.
///
/// # Errors
///
/// Returns [`RequiredVelocityError`] if a forward solve fails, if the target is
/// not met even at [`RequiredVelocityConfig::max_velocity`], or if the solver
/// fails to converge.
pub fn required_velocity(
    input: &HeatSinkInput,
    target: ThermodynamicTemperature,
    config: RequiredVelocityConfig,
) -> Result<Analysis, RequiredVelocityError> {
    StrictlyPositive::check(&(config.max_velocity - config.min_velocity)).map_err(|_| {
        RequiredVelocityError::InvalidBracket {
            min_velocity: config.min_velocity,
            max_velocity: config.max_velocity,
        }
    })?;

    let model = VelocityModel::new(input);

    let slowest = model.call(&config.min_velocity)?;
    if slowest.result.junction_temperature() <= target {
        return Ok(slowest);
    }

    let geometry = input.geometry.derive().map_err(SolveError::from)?;
    let transition = transition_velocity(&input.fluid, geometry.hydraulic_diameter())
        .map_err(SolveError::from)?;

    let mut fastest = slowest;
    for [low, high] in config.regime_segments(transition) {
        if low > config.min_velocity {
            let start = model.call(&low)?;
            if start.result.junction_temperature() <= target {
                debug!(
                    velocity = low.get::<meter_per_second>(),
                    regime = ?start.convection.regime,
                    "target met at the start of a flow regime"
                );
                return Ok(start);
            }
        }

        fastest = model.call(&high)?;
        if fastest.result.junction_temperature() <= target {
            return bisect(&model, target, [low, high], &config);
        }
    }

    Err(RequiredVelocityError::TargetUnreachable {
        target,
        achieved: fastest.result.junction_temperature(),
        max_velocity: config.max_velocity,
    })
}

/// Bisects on velocity inside one flow regime, where the junction
/// temperature is monotonic.
fn bisect(
    model: &VelocityModel<'_>,
    target: ThermodynamicTemperature,
    [low, high]: [Velocity; 2],
    config: &RequiredVelocityConfig,
) -> Result<Analysis, RequiredVelocityError> {
    let problem = RequiredVelocityProblem::new(target);

    let solution = bisection::solve(
        model,
        &problem,
        [low.get::<meter_per_second>(), high.get::<meter_per_second>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Both ends of the bracket solved, so a failure in between is not
            // expected; treat it as too hot and keep searching faster flows.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(RequiredVelocityError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    let analysis = solution.snapshot.output;

    debug!(
        velocity = analysis.convection.velocity.get::<meter_per_second>(),
        regime = ?analysis.convection.regime,
        junction = analysis.result.junction_temperature().get::<degree_celsius>(),
        iters = solution.iters,
        "converged on required velocity"
    );

    Ok(analysis)
}
