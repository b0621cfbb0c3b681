//! Lumped thermal-resistance model of a forced-air heat sink.
//!
//! Heat leaves the junction through a series chain of resistances:
//! junction-to-case, the thermal interface, conduction through the sink
//! base, and convection from the fins to the air. Each stage lives in its
//! own module and validates its inputs before computing anything.

mod conduction;
mod convection;
mod error;
mod geometry;
mod input;
mod network;
mod required_velocity;
mod results;
mod solve;
mod tim;

#[cfg(test)]
pub(crate) mod test_support;

pub use conduction::conduction_resistance;
pub use convection::{Convection, FlowRegime, convection, fin_efficiency, transition_velocity};
pub use error::{GeometryError, NumericDomainError, OperatingConditionError, SolveError};
pub use geometry::{
    DerivedGeometry, HeatSinkGeometry, PositiveArea, PositiveLength, die_contact_area,
};
pub use input::{Airflow, DEFAULT_JUNCTION_TO_CASE, HeatSinkInput};
pub use network::ResistanceBreakdown;
pub use required_velocity::{RequiredVelocityConfig, RequiredVelocityError, required_velocity};
pub use results::{Analysis, SolverResult};
pub use solve::{junction_temperature, solve};
pub use tim::{TimLayer, tim_resistance};
