//! Forced-convection stage.
//!
//! The channel Reynolds number selects a [`FlowRegime`], whose correlation
//! gives the Nusselt number and from it the heat-transfer coefficient over
//! the wetted fin area.

mod regime;

pub use regime::FlowRegime;

#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{
    f64::{Area, HeatTransfer, Length, Ratio, ThermalConductivity, Velocity},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    properties::{FluidProperties, MaterialError},
    units::ThermalResistance,
};

use super::{OperatingConditionError, PositiveLength, SolveError};

/// Result of the convection stage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Convection {
    pub regime: FlowRegime,
    pub velocity: Velocity,
    pub reynolds: Ratio,
    pub nusselt: Ratio,
    pub heat_transfer_coefficient: HeatTransfer,

    /// Convective resistance `1 / (h·A_conv)`.
    pub resistance: ThermalResistance,
}

/// Computes the convective resistance of the fin array.
///
/// The laminar correlation scales with the channel aspect `D_h / H`, the
/// hydraulic diameter over the fin height.
///
/// # Errors
///
/// Returns [`SolveError::InvalidOperatingCondition`] if the velocity or the
/// convective area is not strictly positive, or [`SolveError::InvalidMaterial`]
/// if a fluid property is not strictly positive.
pub fn convection(
    velocity: Velocity,
    fluid: &FluidProperties,
    hydraulic_diameter: PositiveLength,
    fin_height: PositiveLength,
    convective_area: Area,
) -> Result<Convection, SolveError> {
    StrictlyPositive::check(&velocity)
        .map_err(|_| OperatingConditionError::NonPositiveVelocity { velocity })?;
    StrictlyPositive::check(&convective_area).map_err(|_| {
        OperatingConditionError::NonPositiveConvectiveArea {
            area: convective_area,
        }
    })?;
    fluid.validate()?;

    let hydraulic_diameter = hydraulic_diameter.into_inner();

    let reynolds: Ratio = fluid.density * velocity * hydraulic_diameter / fluid.viscosity;
    let regime = FlowRegime::from_reynolds(reynolds);

    let depth_ratio: Ratio = hydraulic_diameter / fin_height.into_inner();
    let nusselt = regime.nusselt(reynolds, fluid.prandtl, depth_ratio);

    let heat_transfer_coefficient: HeatTransfer =
        nusselt * fluid.conductivity / hydraulic_diameter;
    let resistance: ThermalResistance = (heat_transfer_coefficient * convective_area).recip();

    tracing::trace!(
        ?regime,
        reynolds = reynolds.get::<ratio>(),
        nusselt = nusselt.get::<ratio>(),
        "selected convection correlation"
    );

    Ok(Convection {
        regime,
        velocity,
        reynolds,
        nusselt,
        heat_transfer_coefficient,
        resistance,
    })
}

/// Free-stream velocity at which the channel flow turns turbulent.
///
/// `v_t = Re_t·μ / (ρ·D_h)` with `Re_t` = [`FlowRegime::TRANSITION_REYNOLDS`].
///
/// # Errors
///
/// Returns a [`MaterialError`] if a fluid property is not strictly positive.
pub fn transition_velocity(
    fluid: &FluidProperties,
    hydraulic_diameter: PositiveLength,
) -> Result<Velocity, MaterialError> {
    fluid.validate()?;

    Ok(fluid.viscosity * FlowRegime::TRANSITION_REYNOLDS
        / (fluid.density * hydraulic_diameter.into_inner()))
}

/// Computes the efficiency of a straight rectangular fin with an adiabatic tip.
///
/// `η = tanh(mH) / (mH)` with `m = √(2h / (k·t))`.
///
/// The efficiency is a diagnostic; the convective resistance is not derated
/// by it.
#[must_use]
pub fn fin_efficiency(
    heat_transfer_coefficient: HeatTransfer,
    conductivity: ThermalConductivity,
    fin_thickness: Length,
    fin_height: Length,
) -> Ratio {
    let m = (heat_transfer_coefficient * 2.0 / (conductivity * fin_thickness)).sqrt();
    let mh: Ratio = m * fin_height;
    let mh = mh.get::<ratio>();

    if mh == 0.0 {
        return Ratio::new::<ratio>(1.0);
    }

    Ratio::new::<ratio>(mh.tanh() / mh)
}
