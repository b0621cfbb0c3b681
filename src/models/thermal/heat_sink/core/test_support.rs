//! Shared fixtures for heat-sink tests.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power},
    length::millimeter,
    power::watt,
};

use crate::support::properties::{Fluid, SinkMaterial};

use super::{Airflow, HeatSinkGeometry, HeatSinkInput, TimLayer};

/// A dense 60-fin extrusion over a 52.5 × 45 mm die.
pub(crate) fn compact_geometry() -> HeatSinkGeometry {
    HeatSinkGeometry {
        sink_width: Length::new::<millimeter>(116.0),
        sink_length: Length::new::<millimeter>(90.0),
        base_thickness: Length::new::<millimeter>(2.5),
        fin_thickness: Length::new::<millimeter>(0.8),
        fin_height: Length::new::<millimeter>(24.5),
        fin_length: Length::new::<millimeter>(90.0),
        fin_count: 60,
        die_contact_area: Area::new::<square_meter>(0.0525 * 0.045),
    }
}

/// 150 W through the compact sink in 1 m/s of 25 °C air, default TIM and R_jc.
pub(crate) fn compact_input() -> HeatSinkInput {
    HeatSinkInput {
        power: Power::new::<watt>(150.0),
        material: SinkMaterial::Aluminum6061T6,
        geometry: compact_geometry(),
        airflow: Airflow::new(1.0, 25.0),
        fluid: Fluid::Air.properties(),
        tim: TimLayer::default(),
        junction_to_case: None,
    }
}
