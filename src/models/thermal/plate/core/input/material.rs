use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::{
    models::thermal::plate::core::ConfigError,
    support::{constraint::StrictlyPositive, units::ThermalDiffusivity},
};

/// Constant thermophysical properties of the plate.
///
/// Each property is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    conductivity: ThermalConductivity,
    density: MassDensity,
    specific_heat: SpecificHeatCapacity,
}

impl Material {
    /// Constructs validated material properties.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any property is not strictly positive.
    pub fn new(
        conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            conductivity: StrictlyPositive::new(conductivity)
                .map_err(ConfigError::invalid("conductivity"))?
                .into_inner(),
            density: StrictlyPositive::new(density)
                .map_err(ConfigError::invalid("density"))?
                .into_inner(),
            specific_heat: StrictlyPositive::new(specific_heat)
                .map_err(ConfigError::invalid("specific_heat"))?
                .into_inner(),
        })
    }

    /// Thermal conductivity `k`.
    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity
    }

    /// Density `ρ`.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Specific heat capacity `c_p`.
    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat
    }

    /// Thermal diffusivity `α = k / (ρ·c_p)`.
    #[must_use]
    pub fn diffusivity(&self) -> ThermalDiffusivity {
        self.conductivity / (self.density * self.specific_heat)
    }
}

/// Stainless steel: 15.1 W/m·K, 8055 kg/m³, 480 J/kg·K.
impl Default for Material {
    fn default() -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(15.1),
            density: MassDensity::new::<kilogram_per_cubic_meter>(8055.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(480.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn steel_diffusivity() {
        let alpha = Material::default().diffusivity();
        assert_relative_eq!(alpha.value, 15.1 / (8055.0 * 480.0));
    }

    #[test]
    fn rejects_non_positive_properties() {
        let steel = Material::default();

        let err = Material::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
            steel.density(),
            steel.specific_heat(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "conductivity",
                source: ConstraintError::Zero
            }
        );

        let err = Material::new(
            steel.conductivity(),
            MassDensity::new::<kilogram_per_cubic_meter>(-1.0),
            steel.specific_heat(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "density", .. }));

        let err = Material::new(
            steel.conductivity(),
            steel.density(),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(f64::NAN),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "specific_heat",
                source: ConstraintError::NotANumber
            }
        );
    }
}
