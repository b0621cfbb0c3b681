//! Thermal systems models.
//!
//! This module contains models for electronics cooling, starting with
//! forced-air heat sinks.

pub mod heat_sink;
