use crate::support::{
    properties::{MaterialError, MaterialProperties},
    units::ThermalResistance,
};

use super::{PositiveArea, PositiveLength};

/// Computes the 1-D conduction resistance of the sink base, `t_b / (k·A)`.
///
/// Spreading from the die footprint into the wider base is not modeled; the
/// base is treated as a slab conducting through its whole cross-section.
///
/// # Errors
///
/// Returns a [`MaterialError`] if the conductivity is not strictly positive.
pub fn conduction_resistance(
    base_thickness: PositiveLength,
    material: &MaterialProperties,
    cross_section: PositiveArea,
) -> Result<ThermalResistance, MaterialError> {
    material.validate()?;

    Ok(base_thickness.into_inner() / (material.conductivity * cross_section.into_inner()))
}
