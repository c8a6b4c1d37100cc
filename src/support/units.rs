//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical inputs (e.g., lengths, conductivities,
//! temperatures). This module provides quantities that conduction models need
//! but [`uom`] doesn't name.
//!
//! ## Thermal diffusivity
//!
//! [`ThermalDiffusivity`] is the `m²/s` quantity produced by `k / (ρ·c_p)`:
//!
//! ```
//! use uom::si::{
//!     f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity},
//!     mass_density::kilogram_per_cubic_meter,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//! };
//! use twine_conduction::support::units::ThermalDiffusivity;
//!
//! let k = ThermalConductivity::new::<watt_per_meter_kelvin>(15.1);
//! let rho = MassDensity::new::<kilogram_per_cubic_meter>(8055.0);
//! let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(480.0);
//!
//! let alpha: ThermalDiffusivity = k / (rho * cp);
//! assert!((alpha.value - 3.905e-6).abs() < 1e-9);
//! ```

mod quantities;

pub use quantities::ThermalDiffusivity;
