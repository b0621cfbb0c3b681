#[cfg(feature = "serde")]
use serde::Serialize;

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::ThermalResistance,
};

use super::NumericDomainError;

/// Series resistance network from the junction to ambient.
///
/// Junction → case → TIM → sink base (conduction) → air (convection).
///
/// The aggregates are computed once at construction, so
/// `heat_sink == conduction + convection` and
/// `total == junction_to_case + tim + heat_sink` hold exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ResistanceBreakdown {
    junction_to_case: ThermalResistance,
    tim: ThermalResistance,
    conduction: ThermalResistance,
    convection: ThermalResistance,
    heat_sink: ThermalResistance,
    total: ThermalResistance,
}

impl ResistanceBreakdown {
    /// Composes the network from its component resistances.
    ///
    /// # Errors
    ///
    /// Returns a [`NumericDomainError`] if any component is negative or `NaN`,
    /// or if the total is not strictly positive.
    pub fn new(
        junction_to_case: ThermalResistance,
        tim: ThermalResistance,
        conduction: ThermalResistance,
        convection: ThermalResistance,
    ) -> Result<Self, NumericDomainError> {
        non_negative("junction-to-case", junction_to_case)?;
        non_negative("TIM", tim)?;
        non_negative("conduction", conduction)?;
        non_negative("convection", convection)?;

        let heat_sink = conduction + convection;
        let total = junction_to_case + tim + heat_sink;

        StrictlyPositive::check(&total).map_err(|_| NumericDomainError::NonPositiveTotal { total })?;

        Ok(Self {
            junction_to_case,
            tim,
            conduction,
            convection,
            heat_sink,
            total,
        })
    }

    /// Junction-to-case resistance of the package.
    #[must_use]
    pub fn junction_to_case(&self) -> ThermalResistance {
        self.junction_to_case
    }

    /// Thermal interface resistance.
    #[must_use]
    pub fn tim(&self) -> ThermalResistance {
        self.tim
    }

    /// Base conduction resistance.
    #[must_use]
    pub fn conduction(&self) -> ThermalResistance {
        self.conduction
    }

    /// Fin-array convection resistance.
    #[must_use]
    pub fn convection(&self) -> ThermalResistance {
        self.convection
    }

    /// Heat-sink resistance, conduction plus convection.
    #[must_use]
    pub fn heat_sink(&self) -> ThermalResistance {
        self.heat_sink
    }

    /// Junction-to-ambient resistance.
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        self.total
    }
}

fn non_negative(
    component: &'static str,
    value: ThermalResistance,
) -> Result<(), NumericDomainError> {
    NonNegative::check(&value)
        .map_err(|_| NumericDomainError::InvalidResistance { component, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::units::KelvinPerWatt;

    fn r(value: f64) -> ThermalResistance {
        ThermalResistance::from_kelvin_per_watt(value)
    }

    #[test]
    fn totals_are_exact_sums() {
        let breakdown = ResistanceBreakdown::new(r(0.1), r(0.0106), r(0.0014), r(0.1267)).unwrap();

        assert_eq!(breakdown.heat_sink(), r(0.0014) + r(0.1267));
        assert_eq!(
            breakdown.total(),
            breakdown.junction_to_case() + breakdown.tim() + breakdown.heat_sink()
        );
    }

    #[test]
    fn zero_components_are_allowed() {
        let breakdown = ResistanceBreakdown::new(r(0.0), r(0.0), r(0.003), r(0.37)).unwrap();
        assert_eq!(breakdown.total(), breakdown.heat_sink());
    }

    #[test]
    fn rejects_negative_or_nan_components() {
        assert_eq!(
            ResistanceBreakdown::new(r(0.1), r(-0.01), r(0.001), r(0.1)),
            Err(NumericDomainError::InvalidResistance {
                component: "TIM",
                value: r(-0.01)
            })
        );
        assert!(matches!(
            ResistanceBreakdown::new(r(0.1), r(0.01), r(0.001), r(f64::NAN)),
            Err(NumericDomainError::InvalidResistance {
                component: "convection",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_total() {
        assert!(matches!(
            ResistanceBreakdown::new(r(0.0), r(0.0), r(0.0), r(0.0)),
            Err(NumericDomainError::NonPositiveTotal { .. })
        ));
    }
}
