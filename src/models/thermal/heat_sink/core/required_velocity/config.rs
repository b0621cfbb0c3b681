use twine_solvers::equation::bisection;
use uom::si::{
    f64::{TemperatureInterval, Velocity},
    temperature_interval::kelvin as delta_kelvin,
    velocity::meter_per_second,
};

/// Relative offset from the transition velocity to each regime's segment end.
const REGIME_GAP: f64 = 1e-12;

/// Solver configuration for the required-velocity search.
#[derive(Debug, Clone, Copy)]
pub struct RequiredVelocityConfig {
    /// Lowest velocity considered; must be positive.
    pub min_velocity: Velocity,

    /// Highest velocity considered.
    pub max_velocity: Velocity,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the velocity search variable.
    pub velocity_tol: Velocity,

    /// Absolute tolerance on the junction temperature residual (achieved - target).
    pub temperature_tol: TemperatureInterval,
}

impl Default for RequiredVelocityConfig {
    fn default() -> Self {
        Self {
            min_velocity: Velocity::new::<meter_per_second>(0.05),
            max_velocity: Velocity::new::<meter_per_second>(25.0),
            max_iters: 100,
            velocity_tol: Velocity::new::<meter_per_second>(1e-9),
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
        }
    }
}

impl RequiredVelocityConfig {
    /// Splits the search range at the laminar-to-turbulent transition.
    ///
    /// Each returned segment lies within a single flow regime, ordered from
    /// slow to fast. The transition velocity is nudged off by a relative
    /// [`REGIME_GAP`] on either side so rounding in the Reynolds number never
    /// lands a segment end in the other regime.
    pub(super) fn regime_segments(&self, transition: Velocity) -> Vec<[Velocity; 2]> {
        let laminar_end = transition * (1.0 - REGIME_GAP);
        let turbulent_start = transition * (1.0 + REGIME_GAP);

        if self.min_velocity < laminar_end && turbulent_start < self.max_velocity {
            vec![
                [self.min_velocity, laminar_end],
                [turbulent_start, self.max_velocity],
            ]
        } else {
            vec![[self.min_velocity, self.max_velocity]]
        }
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.velocity_tol.get::<meter_per_second>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
