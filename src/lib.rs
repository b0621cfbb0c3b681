//! # Heat-Sink Models
//!
//! Lumped thermal-resistance models of forced-air processor heat sinks for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given the dissipated power, the sink geometry and material, the thermal
//! interface, and the airflow, the models resolve the junction-to-ambient
//! resistance network and the resulting junction temperature.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models (units, numeric
//!   constraints, material and fluid property tables).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! moves to [`support`] once it is useful beyond that model.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for model inputs and identifiers, and
//!   `Serialize` for results.

pub mod models;
pub mod support;
