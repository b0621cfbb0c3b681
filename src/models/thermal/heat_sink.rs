//! Forced-air heat-sink model.
//!
//! [`HeatSink`] is a [`twine_core::Model`] that takes a [`HeatSinkInput`] and
//! returns an [`Analysis`]: the junction-to-ambient resistance breakdown,
//! the junction temperature, and diagnostics from the convection stage.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use heatsink_models::models::thermal::heat_sink::{
//!     Airflow, HeatSink, HeatSinkGeometry, HeatSinkInput, TimLayer,
//! };
//! use heatsink_models::support::properties::{Fluid, SinkMaterial};
//! use twine_core::Model;
//! use uom::si::{
//!     area::square_millimeter,
//!     f64::{Area, Length, Power},
//!     length::millimeter,
//!     power::watt,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let input = HeatSinkInput {
//!     power: Power::new::<watt>(95.0),
//!     material: SinkMaterial::Aluminum6063T5,
//!     geometry: HeatSinkGeometry {
//!         sink_width: Length::new::<millimeter>(80.0),
//!         sink_length: Length::new::<millimeter>(80.0),
//!         base_thickness: Length::new::<millimeter>(4.0),
//!         fin_thickness: Length::new::<millimeter>(1.2),
//!         fin_height: Length::new::<millimeter>(30.0),
//!         fin_length: Length::new::<millimeter>(80.0),
//!         fin_count: 24,
//!         die_contact_area: Area::new::<square_millimeter>(1200.0),
//!     },
//!     airflow: Airflow::new(2.5, 30.0),
//!     fluid: Fluid::Air.properties(),
//!     tim: TimLayer::default(),
//!     junction_to_case: None,
//! };
//!
//! let analysis = HeatSink.call(&input).unwrap();
//! let t_j = analysis.result.junction_temperature().get::<degree_celsius>();
//! assert!(t_j > 30.0);
//! ```

mod core;
pub mod reference;

pub use self::core::{
    Airflow, Analysis, Convection, DEFAULT_JUNCTION_TO_CASE, DerivedGeometry, FlowRegime,
    GeometryError, HeatSinkGeometry, HeatSinkInput, NumericDomainError, OperatingConditionError,
    PositiveArea, PositiveLength, RequiredVelocityConfig, RequiredVelocityError,
    ResistanceBreakdown, SolveError, SolverResult, TimLayer, conduction_resistance, convection,
    die_contact_area, fin_efficiency, junction_temperature, tim_resistance, transition_velocity,
};

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

/// Lumped thermal-resistance model of a processor heat sink in forced air.
///
/// Stateless; a single value can serve any number of solves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeatSink;

impl HeatSink {
    /// Finds the slowest airflow that keeps the junction at or below `target`.
    ///
    /// This is a convenience wrapper around the bisection search in the core.
    ///
    /// # Errors
    ///
    /// Returns a [`RequiredVelocityError`] if a forward solve fails, if the
    /// target cannot be reached within the configured velocity range, or if
    /// the solver fails to converge.
    pub fn required_velocity(
        &self,
        input: &HeatSinkInput,
        target: ThermodynamicTemperature,
        config: RequiredVelocityConfig,
    ) -> Result<Analysis, RequiredVelocityError> {
        self::core::required_velocity(input, target, config)
    }
}

impl Model for HeatSink {
    type Input = HeatSinkInput;
    type Output = Analysis;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve(input)
    }
}
