//! Problem formulation for the required-velocity search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::models::thermal::heat_sink::core::{Analysis, HeatSinkInput, SolveError, solve};

/// Model adapter exposing the free-stream velocity as the sole input.
pub(super) struct VelocityModel<'a> {
    input: &'a HeatSinkInput,
}

impl<'a> VelocityModel<'a> {
    pub(super) fn new(input: &'a HeatSinkInput) -> Self {
        Self { input }
    }
}

impl Model for VelocityModel<'_> {
    type Input = Velocity;
    type Output = Analysis;
    type Error = SolveError;

    fn call(&self, velocity: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut input = *self.input;
        input.airflow.velocity = *velocity;
        solve(&input)
    }
}

/// Equation problem for matching a target junction temperature.
///
/// Computes the residual as `achieved - target`, which falls as velocity rises.
pub(super) struct RequiredVelocityProblem {
    target: ThermodynamicTemperature,
}

impl RequiredVelocityProblem {
    pub(super) fn new(target: ThermodynamicTemperature) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for RequiredVelocityProblem {
    type Input = Velocity;
    type Output = Analysis;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Velocity::new::<meter_per_second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.result.junction_temperature().get::<kelvin>();
        let target = self.target.get::<kelvin>();
        Ok([achieved - target])
    }
}
