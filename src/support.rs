//! Supporting utilities shared across models.
//!
//! These APIs are public but not stable.

pub mod constraint;
pub mod units;
