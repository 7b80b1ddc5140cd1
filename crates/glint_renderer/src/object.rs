//! Renderable objects and ray hits.

use glint_core::{Material, SceneDescription};
use glint_math::{Ray, Vec3};

use crate::Sphere;

/// Every kind of primitive the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Sphere(Sphere),
}

impl Object {
    /// Smallest root of the ray/surface equation, or `None` if the ray's
    /// line never meets the surface.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Object::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    /// Outward surface vector at `point`. Callers normalize.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Object::Sphere(sphere) => sphere.normal_at(point),
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        match self {
            Object::Sphere(sphere) => sphere.material(),
        }
    }

    /// Build the object list for a scene description, preserving order.
    pub fn from_description(desc: &SceneDescription) -> Vec<Object> {
        desc.spheres
            .iter()
            .map(|s| Object::Sphere(Sphere::from_desc(s)))
            .collect()
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

/// The nearest object along a ray and where it was hit.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a Object,
    /// Ray parameter of the hit point
    pub t: f32,
}

impl<'a> Hit<'a> {
    /// Hit point on `ray`.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Vec3 {
        ray.at(self.t)
    }
}
