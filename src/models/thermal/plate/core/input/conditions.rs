use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{models::thermal::plate::core::ConfigError, support::constraint::StrictlyPositive};

/// Boundary and initial conditions for the plate.
///
/// - Row 0 of the stem is held at `surface`.
/// - The notch wall and the east edge convect to `ambient` through `convection`.
/// - The west edge receives `q_dot`.
/// - Every other plate node starts at `initial`.
///
/// The west-edge source enters the update as `2·q̇·Δt / (ρ·c_p·Δx)`, the form
/// of a prescribed flux on a mirrored boundary node, so `q_dot` is carried as a
/// flux density (W/m²).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    convection: HeatTransfer,
    ambient: ThermodynamicTemperature,
    surface: ThermodynamicTemperature,
    initial: ThermodynamicTemperature,
    q_dot: HeatFluxDensity,
}

impl Conditions {
    /// Constructs validated conditions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the convection coefficient or any absolute
    /// temperature is not strictly positive, or if `q_dot` is not finite.
    pub fn new(
        convection: HeatTransfer,
        ambient: ThermodynamicTemperature,
        surface: ThermodynamicTemperature,
        initial: ThermodynamicTemperature,
        q_dot: HeatFluxDensity,
    ) -> Result<Self, ConfigError> {
        let convection = StrictlyPositive::new(convection)
            .map_err(ConfigError::invalid("convection"))?
            .into_inner();

        for (field, temperature) in [
            ("ambient", ambient),
            ("surface", surface),
            ("initial", initial),
        ] {
            StrictlyPositive::new(temperature.get::<kelvin>())
                .map_err(ConfigError::invalid(field))?;
        }

        if !q_dot.value.is_finite() {
            return Err(ConfigError::NotFinite { field: "q_dot" });
        }

        Ok(Self {
            convection,
            ambient,
            surface,
            initial,
            q_dot,
        })
    }

    /// Convection coefficient `h` on exposed faces.
    #[must_use]
    pub fn convection(&self) -> HeatTransfer {
        self.convection
    }

    /// Ambient temperature `T∞` seen by convective faces.
    #[must_use]
    pub fn ambient(&self) -> ThermodynamicTemperature {
        self.ambient
    }

    /// Temperature `Ts` of the fixed edge.
    #[must_use]
    pub fn surface(&self) -> ThermodynamicTemperature {
        self.surface
    }

    /// Initial temperature `T0` of every free node.
    #[must_use]
    pub fn initial(&self) -> ThermodynamicTemperature {
        self.initial
    }

    /// Heat input `q̇` along the west edge.
    ///
    /// This is a flux density in W/m², not a volumetric generation rate. A
    /// value quoted as "20 000 W/m³" enters the update unchanged as
    /// 20 000 W/m² on the west edge, through `2·q̇·Δt / (ρ·c_p·Δx)`.
    #[must_use]
    pub fn q_dot(&self) -> HeatFluxDensity {
        self.q_dot
    }
}

/// `h` = 20 W/m²·K, `T∞` = 300 K, `Ts` = 400 K, `T0` = 300 K, `q̇` = 20 000 W/m².
impl Default for Conditions {
    fn default() -> Self {
        Self {
            convection: HeatTransfer::new::<watt_per_square_meter_kelvin>(20.0),
            ambient: ThermodynamicTemperature::new::<kelvin>(300.0),
            surface: ThermodynamicTemperature::new::<kelvin>(400.0),
            initial: ThermodynamicTemperature::new::<kelvin>(300.0),
            q_dot: HeatFluxDensity::new::<watt_per_square_meter>(20_000.0),
        }
    }
}
