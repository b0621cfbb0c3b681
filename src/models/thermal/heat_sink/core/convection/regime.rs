#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{f64::Ratio, ratio::ratio};

/// Flow regime in the fin channels.
///
/// There is no transitional state: the regime switches at exactly
/// [`FlowRegime::TRANSITION_REYNOLDS`], which belongs to the turbulent side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FlowRegime {
    /// Developing laminar flow, correlated with Sieder–Tate.
    Laminar,

    /// Fully turbulent flow, correlated with Dittus–Boelter.
    Turbulent,
}

impl FlowRegime {
    /// Channel Reynolds number at which the flow is taken to be turbulent.
    pub const TRANSITION_REYNOLDS: f64 = 2300.0;

    /// Selects the regime for a channel Reynolds number.
    #[must_use]
    pub fn from_reynolds(reynolds: Ratio) -> Self {
        if reynolds.get::<ratio>() < Self::TRANSITION_REYNOLDS {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }

    /// Evaluates this regime's Nusselt correlation.
    ///
    /// `depth_ratio` is the hydraulic diameter over the fin height,
    /// `D_h / H`; only the laminar correlation depends on it.
    #[must_use]
    pub fn nusselt(self, reynolds: Ratio, prandtl: Ratio, depth_ratio: Ratio) -> Ratio {
        let re = reynolds.get::<ratio>();
        let pr = prandtl.get::<ratio>();

        let nu = match self {
            Self::Laminar => sieder_tate(re, pr, depth_ratio.get::<ratio>()),
            Self::Turbulent => dittus_boelter(re, pr),
        };

        Ratio::new::<ratio>(nu)
    }
}

/// Sieder–Tate correlation for developing laminar flow.
///
/// `Nu = 1.86·(Re·Pr·D_h/H)^(1/3)`, with the bulk-to-wall viscosity
/// correction taken as unity since fluid properties are constant.
fn sieder_tate(re: f64, pr: f64, depth_ratio: f64) -> f64 {
    1.86 * (re * pr * depth_ratio).cbrt()
}

/// Dittus–Boelter correlation for turbulent flow, cooling form.
///
/// `Nu = 0.023·Re^0.8·Pr^0.3`
fn dittus_boelter(re: f64, pr: f64) -> f64 {
    0.023 * re.powf(0.8) * pr.powf(0.3)
}
