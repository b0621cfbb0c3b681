#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, ThermalConductivity},
    length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    properties::MaterialError,
    units::ThermalResistance,
};

use super::{GeometryError, PositiveArea, SolveError};

/// Thermal interface material between the die and the sink base.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimLayer {
    /// Bond-line thickness; zero models a bare metal-to-metal contact.
    pub thickness: Length,
    pub conductivity: ThermalConductivity,
}

impl TimLayer {
    /// A bare contact with no interface material.
    ///
    /// The conductivity is kept at the default paste value so the layer still
    /// validates; with zero thickness it contributes no resistance.
    #[must_use]
    pub fn bare_contact() -> Self {
        Self {
            thickness: Length::new::<millimeter>(0.0),
            ..Self::default()
        }
    }
}

impl Default for TimLayer {
    /// A 0.1 mm layer of a 4 W/m·K thermal paste.
    fn default() -> Self {
        Self {
            thickness: Length::new::<millimeter>(0.1),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(4.0),
        }
    }
}

/// Computes the interface resistance `t / (k·A_die)`.
///
/// The die contact area is used because heat crosses the interface only
/// over the die footprint, not the full sink base.
///
/// # Errors
///
/// Returns [`SolveError::InvalidMaterial`] if the conductivity is not strictly
/// positive, or [`SolveError::InvalidGeometry`] if the thickness is negative.
pub fn tim_resistance(
    tim: &TimLayer,
    die_area: PositiveArea,
) -> Result<ThermalResistance, SolveError> {
    StrictlyPositive::check(&tim.conductivity).map_err(|_| MaterialError::Conductivity {
        material: "thermal interface material",
        conductivity: tim.conductivity,
    })?;

    NonNegative::check(&tim.thickness).map_err(|_| GeometryError::NegativeLength {
        dimension: "TIM thickness",
        value: tim.thickness,
    })?;

    Ok(tim.thickness / (tim.conductivity * die_area.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, f64::Area, length::meter};

    use crate::support::units::KelvinPerWatt;

    fn die() -> PositiveArea {
        StrictlyPositive::new(Area::new::<square_meter>(0.0525 * 0.045)).unwrap()
    }

    #[test]
    fn default_paste_layer() {
        let r = tim_resistance(&TimLayer::default(), die()).unwrap();
        assert_relative_eq!(
            r.kelvin_per_watt(),
            0.0001 / (4.0 * 0.0023625),
            max_relative = 1e-12
        );
    }

    #[test]
    fn bare_contact_has_no_resistance() {
        let r = tim_resistance(&TimLayer::bare_contact(), die()).unwrap();
        assert_eq!(r.kelvin_per_watt(), 0.0);
    }

    #[test]
    fn rejects_invalid_layers() {
        let tim = TimLayer {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
            ..TimLayer::default()
        };
        assert!(matches!(
            tim_resistance(&tim, die()),
            Err(SolveError::InvalidMaterial(MaterialError::Conductivity { .. }))
        ));

        let tim = TimLayer {
            thickness: Length::new::<meter>(-1e-4),
            ..TimLayer::default()
        };
        assert!(matches!(
            tim_resistance(&tim, die()),
            Err(SolveError::InvalidGeometry(GeometryError::NegativeLength { .. }))
        ));
    }

    #[test]
    fn thicker_layer_on_smaller_die_costs_more() {
        let thick = TimLayer {
            thickness: Length::new::<millimeter>(0.2),
            ..TimLayer::default()
        };
        let small_die = StrictlyPositive::new(Area::new::<square_meter>(0.02 * 0.02)).unwrap();

        let baseline = tim_resistance(&TimLayer::default(), die()).unwrap();
        let worse = tim_resistance(&thick, small_die).unwrap();

        // 0.0002 / (4 · 0.0004)
        assert_relative_eq!(worse.kelvin_per_watt(), 0.125, max_relative = 1e-12);
        assert!(worse > baseline);
    }
}
