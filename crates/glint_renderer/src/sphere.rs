//! Sphere primitive for ray tracing.

use glint_core::{Material, SphereDesc};
use glint_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn from_desc(desc: &SphereDesc) -> Self {
        Self::new(desc.center, desc.radius, desc.material)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Solve `|O + tD - C|^2 = r^2` for `t`.
    ///
    /// Returns `None` when the ray's line misses the sphere, otherwise the
    /// smaller root. The root may be negative or tiny; range filtering is
    /// up to the caller.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let far = (-b + sqrtd) / (2.0 * a);
        let near = (-b - sqrtd) / (2.0 * a);
        Some(if far > near { near } else { far })
    }

    /// Outward vector from the center through `point`. Not normalized.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        point - self.center
    }
}
