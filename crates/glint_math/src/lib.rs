// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod interval;
mod ray;
pub use color::Color;
pub use interval::Interval;
pub use ray::Ray;

/// Mirror `ray` about `normal`.
///
/// Both vectors point away from the surface, so reflecting the direction
/// towards the viewer gives the outgoing mirror direction.
#[inline]
pub fn reflect(ray: Vec3, normal: Vec3) -> Vec3 {
    normal * (2.0 * normal.dot(ray)) - ray
}
