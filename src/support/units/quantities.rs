use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P2, Z0},
};

/// Thermal diffusivity, m²/s in SI.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Area, Length, MassDensity, Ratio, SpecificHeatCapacity, ThermalConductivity, Time},
        length::millimeter,
        mass_density::kilogram_per_cubic_meter,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        time::second,
    };

    #[test]
    fn diffusivity_times_time_over_area_is_dimensionless() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(237.0);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(2700.0);
        let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0);
        let alpha: ThermalDiffusivity = k / (rho * cp);

        let dx = Length::new::<millimeter>(5.0);
        let area: Area = dx * dx;
        let fourier: Ratio = alpha * Time::new::<second>(0.05) / area;

        assert_relative_eq!(fourier.get::<ratio>(), 0.195_061_728, epsilon = 1e-8);
    }
}
