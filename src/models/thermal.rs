//! Thermal systems models.
//!
//! This module contains conduction models for solid bodies.

pub mod plate;
