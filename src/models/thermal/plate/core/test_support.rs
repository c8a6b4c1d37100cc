use uom::si::{
    f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity, Time},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    time::second,
};

use super::{Geometry, Material, Operator, Plate};

pub(super) fn seconds(value: f64) -> Time {
    Time::new::<second>(value)
}

/// Default plate stepped at 0.1 s.
pub(super) fn default_operator() -> Operator {
    Operator::build(&Plate::default(), seconds(0.1)).expect("default step is valid")
}

/// A 9×9 grid (0.04 m at 5 mm) with every other input at its default.
pub(super) fn small_plate() -> Plate {
    Plate {
        geometry: Geometry::new(Length::new::<meter>(0.04), Length::new::<meter>(0.005))
            .expect("9x9 grid is valid"),
        ..Plate::default()
    }
}

/// The default grid in aluminum: 237 W/m·K, 2700 kg/m³, 900 J/kg·K.
pub(super) fn aluminum_plate() -> Plate {
    Plate {
        material: Material::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(237.0),
            MassDensity::new::<kilogram_per_cubic_meter>(2700.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
        )
        .expect("aluminum properties are valid"),
        ..Plate::default()
    }
}
