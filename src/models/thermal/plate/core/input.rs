mod conditions;
mod geometry;
mod material;
mod plate;

pub use conditions::Conditions;
pub use geometry::{Geometry, MAX_NODES};
pub use material::Material;
pub use plate::Plate;
