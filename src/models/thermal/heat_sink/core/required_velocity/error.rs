use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature, Velocity};

use crate::models::thermal::heat_sink::core::SolveError;

/// Errors that can occur while searching for the velocity that meets a
/// target junction temperature.
#[derive(Debug, Error)]
pub enum RequiredVelocityError {
    /// A forward solve failed.
    #[error("forward solve failed")]
    Solve(#[from] SolveError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The velocity bracket is empty or reversed.
    #[error("invalid velocity bracket: {min_velocity:?} to {max_velocity:?}")]
    InvalidBracket {
        min_velocity: Velocity,
        max_velocity: Velocity,
    },

    /// Even the highest velocity in the bracket leaves the junction above target.
    #[error("target {target:?} not reachable: junction reaches {achieved:?} at {max_velocity:?}")]
    TargetUnreachable {
        target: ThermodynamicTemperature,

        /// Junction temperature at the highest velocity.
        achieved: ThermodynamicTemperature,

        max_velocity: Velocity,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best junction temperature residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
