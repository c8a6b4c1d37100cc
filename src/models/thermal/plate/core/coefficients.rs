//! Dimensionless groups shared by every stencil.

use uom::si::{
    f64::{Ratio, TemperatureInterval, Time},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::Plate;

/// Constants of the explicit update for one plate and time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Fourier number `F0 = α·Δt / Δx²`.
    pub fourier: f64,

    /// Grid Biot number `Bi = h·Δx / k`.
    pub biot: f64,

    /// West-edge source term `N1 = 2·q̇·Δt / (ρ·c_p·Δx)`, in kelvin per step.
    pub source: f64,

    /// Ambient temperature `T∞`, in kelvin.
    pub ambient: f64,

    /// Fixed-edge temperature `Ts`, in kelvin.
    pub surface: f64,
}

impl Coefficients {
    /// Evaluates the groups for `plate` advanced by `time_step`.
    #[must_use]
    pub fn new(plate: &Plate, time_step: Time) -> Self {
        let Plate {
            geometry,
            material,
            conditions,
        } = plate;
        let dx = geometry.spacing();

        let fourier: Ratio = material.diffusivity() * time_step / (dx * dx);
        let biot: Ratio = conditions.convection() * dx / material.conductivity();
        let source: TemperatureInterval = time_step * conditions.q_dot() * 2.0
            / (material.density() * material.specific_heat() * dx);

        Self {
            fourier: fourier.get::<ratio>(),
            biot: biot.get::<ratio>(),
            source: source.get::<delta_kelvin>(),
            ambient: conditions.ambient().get::<kelvin>(),
            surface: conditions.surface().get::<kelvin>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::second;

    #[test]
    fn default_plate_groups() {
        let coefficients = Coefficients::new(&Plate::default(), Time::new::<second>(0.1));

        assert_relative_eq!(coefficients.fourier, 0.015_621_767_018_415, epsilon = 1e-12);
        assert_relative_eq!(coefficients.biot, 20.0 * 0.005 / 15.1, epsilon = 1e-15);
        assert_relative_eq!(coefficients.source, 0.206_910_821_435_961, epsilon = 1e-12);
        assert_relative_eq!(coefficients.ambient, 300.0);
        assert_relative_eq!(coefficients.surface, 400.0);
    }

    #[test]
    fn west_edge_source_takes_q_dot_as_flux() {
        let plate = Plate::default();
        let dt = 0.1;
        let coefficients = Coefficients::new(&plate, Time::new::<second>(dt));

        let rho_cp = plate.material.density().value * plate.material.specific_heat().value;
        let dx = plate.geometry.spacing().value;
        assert_relative_eq!(
            coefficients.source * rho_cp * dx / (2.0 * dt),
            20_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn fourier_scales_with_time_step() {
        let plate = Plate::default();
        let short = Coefficients::new(&plate, Time::new::<second>(0.1));
        let long = Coefficients::new(&plate, Time::new::<second>(1.0));

        assert_relative_eq!(long.fourier, 10.0 * short.fourier, max_relative = 1e-12);
        assert_relative_eq!(long.source, 10.0 * short.source, max_relative = 1e-12);
        assert_relative_eq!(long.biot, short.biot);
    }
}
