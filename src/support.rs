//! Supporting utilities used by models.

pub mod constraint;
pub mod properties;
pub mod units;
