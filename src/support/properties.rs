//! Immutable material and fluid property tables.
//!
//! Properties are keyed by identifier enums ([`SinkMaterial`], [`Fluid`]) and
//! compiled into the crate, so the tables need no initialization and can be
//! read concurrently without synchronization.
//! Identifiers can be parsed from string keys (e.g. `"al-6061-t6"`, `"air"`);
//! an unrecognized key is reported as [`MaterialError::Unknown`].
//!
//! ```
//! use heatsink_models::support::properties::{Fluid, SinkMaterial};
//! use uom::si::thermal_conductivity::watt_per_meter_kelvin;
//!
//! let material: SinkMaterial = "Al 6061-T6".parse().unwrap();
//! let k = material.properties().conductivity;
//! assert_eq!(k.get::<watt_per_meter_kelvin>(), 167.0);
//!
//! assert!("unobtainium".parse::<SinkMaterial>().is_err());
//! assert_eq!("air".parse::<Fluid>().unwrap(), Fluid::Air);
//! ```

mod error;
mod fluid;
mod solid;

pub use error::MaterialError;
pub use fluid::{Fluid, FluidProperties};
pub use solid::{MaterialProperties, SinkMaterial};

/// Normalizes a user-supplied identifier for table lookup.
///
/// Lookup is case-insensitive and treats spaces and underscores as hyphens,
/// so `"Al 6061-T6"`, `"al_6061_t6"` and `"al-6061-t6"` name the same entry.
fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
