pub mod caster;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod projection;

pub use caster::{Facing, HitAxis, Ray, RayCaster, cast_ray};
pub use engine::Engine;
pub use projection::{Column, Projector, Shades, perpendicular_distance};
