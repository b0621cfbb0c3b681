use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, N2, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
///
/// Dimensionally this is `m⁻²·kg⁻¹·s³·K`, the reciprocal of
/// [`ThermalConductance`](uom::si::f64::ThermalConductance).
/// Multiplying it by a [`Power`] yields a [`TemperatureInterval`].
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Extension trait for working with [`ThermalResistance`] in K/W.
///
/// [`uom`] has no unit module for thermal resistance, so values are created
/// as a temperature interval per watt and read back in SI base units.
/// Because a kelvin interval equals a Celsius interval, K/W and °C/W are the
/// same number.
pub trait KelvinPerWatt {
    /// Creates a resistance from a value in K/W.
    fn from_kelvin_per_watt(value: f64) -> Self;

    /// Returns the resistance in K/W.
    fn kelvin_per_watt(&self) -> f64;
}

impl KelvinPerWatt for ThermalResistance {
    fn from_kelvin_per_watt(value: f64) -> Self {
        TemperatureInterval::new::<delta_kelvin>(value) / Power::new::<watt>(1.0)
    }

    fn kelvin_per_watt(&self) -> f64 {
        self.value
    }
}
