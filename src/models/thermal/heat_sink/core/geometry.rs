//! Geometry model for a straight-fin heat sink.
//!
//! The fins are modeled as parallel plates standing on the sink base, with
//! airflow running along the fin length through the channels between them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::f64::{Area, Length};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::GeometryError;

/// Raw heat-sink and die dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeatSinkGeometry {
    /// Base width, across the fins.
    pub sink_width: Length,

    /// Base length, along the flow direction.
    pub sink_length: Length,

    pub base_thickness: Length,
    pub fin_thickness: Length,
    pub fin_height: Length,

    /// Fin extent in the flow direction.
    pub fin_length: Length,

    /// Number of fins; at least 2.
    pub fin_count: u32,

    /// Contact area between the die (or lid) and the sink base.
    pub die_contact_area: Area,
}

impl HeatSinkGeometry {
    /// Validates the dimensions and derives the quantities used by the
    /// resistance stages.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any dimension is not strictly positive,
    /// if there are fewer than 2 fins, or if the fins leave no room for
    /// channels between them.
    pub fn derive(&self) -> Result<DerivedGeometry, GeometryError> {
        let sink_width = positive_length("sink width", self.sink_width)?;
        let sink_length = positive_length("sink length", self.sink_length)?;
        let base_thickness = positive_length("base thickness", self.base_thickness)?;
        let fin_thickness = positive_length("fin thickness", self.fin_thickness)?;
        let fin_height = positive_length("fin height", self.fin_height)?;
        let fin_length = positive_length("fin length", self.fin_length)?;
        let die_contact_area = positive_area("die contact area", self.die_contact_area)?;

        let fin_spacing = fin_spacing(sink_width, fin_thickness, self.fin_count)?;
        let hydraulic_diameter = positive_length(
            "hydraulic diameter",
            hydraulic_diameter(fin_spacing, fin_height),
        )?;

        let fins = f64::from(self.fin_count);
        let convective_area = positive_area(
            "convective area",
            fin_height.into_inner() * fin_length.into_inner() * (2.0 * fins),
        )?;
        let conduction_area = positive_area(
            "conduction cross-section",
            sink_width.into_inner() * sink_length.into_inner(),
        )?;

        Ok(DerivedGeometry {
            fin_spacing,
            hydraulic_diameter,
            convective_area,
            conduction_area,
            die_contact_area,
            base_thickness,
            fin_thickness,
            fin_height,
            fin_length,
        })
    }
}

/// Validated geometry and the quantities derived from it.
///
/// Only [`HeatSinkGeometry::derive`] creates this type, and every length and
/// area it hands out carries its strictly positive guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DerivedGeometry {
    fin_spacing: PositiveLength,
    hydraulic_diameter: PositiveLength,
    convective_area: PositiveArea,
    conduction_area: PositiveArea,
    die_contact_area: PositiveArea,
    base_thickness: PositiveLength,
    fin_thickness: PositiveLength,
    fin_height: PositiveLength,
    fin_length: PositiveLength,
}

/// A length validated as strictly positive.
pub type PositiveLength = Constrained<Length, StrictlyPositive>;

/// An area validated as strictly positive.
pub type PositiveArea = Constrained<Area, StrictlyPositive>;

impl DerivedGeometry {
    /// Clear gap between adjacent fins.
    #[must_use]
    pub fn fin_spacing(&self) -> PositiveLength {
        self.fin_spacing
    }

    /// Hydraulic diameter of one fin channel.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> PositiveLength {
        self.hydraulic_diameter
    }

    /// Wetted fin area, counting both faces of every fin.
    ///
    /// The exposed base between fins and the fin tips are excluded.
    #[must_use]
    pub fn convective_area(&self) -> PositiveArea {
        self.convective_area
    }

    /// Base footprint used for 1-D conduction.
    #[must_use]
    pub fn conduction_area(&self) -> PositiveArea {
        self.conduction_area
    }

    #[must_use]
    pub fn die_contact_area(&self) -> PositiveArea {
        self.die_contact_area
    }

    #[must_use]
    pub fn base_thickness(&self) -> PositiveLength {
        self.base_thickness
    }

    #[must_use]
    pub fn fin_thickness(&self) -> PositiveLength {
        self.fin_thickness
    }

    #[must_use]
    pub fn fin_height(&self) -> PositiveLength {
        self.fin_height
    }

    #[must_use]
    pub fn fin_length(&self) -> PositiveLength {
        self.fin_length
    }
}

/// Computes the die contact area of a rectangular die footprint.
///
/// # Errors
///
/// Returns a [`GeometryError`] if either side is not strictly positive.
pub fn die_contact_area(die_length: Length, die_width: Length) -> Result<Area, GeometryError> {
    let die_length = positive_length("die length", die_length)?;
    let die_width = positive_length("die width", die_width)?;
    Ok(die_length.into_inner() * die_width.into_inner())
}

/// Computes the clear spacing between fins spread evenly across the sink width.
///
/// `s = (W - N·t) / (N - 1)`
fn fin_spacing(
    sink_width: PositiveLength,
    fin_thickness: PositiveLength,
    fin_count: u32,
) -> Result<PositiveLength, GeometryError> {
    if fin_count < 2 {
        return Err(GeometryError::TooFewFins { fin_count });
    }

    let fins = f64::from(fin_count);
    let spacing = (sink_width.into_inner() - fin_thickness.into_inner() * fins) / (fins - 1.0);

    StrictlyPositive::new(spacing).map_err(|_| GeometryError::NonPositiveFinSpacing { spacing })
}

/// Hydraulic diameter `4A/P` of a rectangular channel of width `s` and depth `H`.
///
/// The channel is bounded by two fin faces and treated as a closed duct,
/// giving `D_h = 2·s·H / (s + H)`, which tends to the parallel-plate limit
/// `2·s` for deep channels.
fn hydraulic_diameter(fin_spacing: PositiveLength, fin_height: PositiveLength) -> Length {
    let (s, h) = (fin_spacing.into_inner(), fin_height.into_inner());
    s * h * 2.0 / (s + h)
}

fn positive_length(
    dimension: &'static str,
    value: Length,
) -> Result<PositiveLength, GeometryError> {
    StrictlyPositive::new(value).map_err(|_| GeometryError::NonPositiveLength { dimension, value })
}

fn positive_area(dimension: &'static str, value: Area) -> Result<PositiveArea, GeometryError> {
    StrictlyPositive::new(value).map_err(|_| GeometryError::NonPositiveArea { dimension, value })
}
