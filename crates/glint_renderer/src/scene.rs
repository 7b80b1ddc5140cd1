//! Scene: the ordered object list and the nearest-hit query.

use glint_core::SceneDescription;
use glint_math::Ray;

use crate::{Hit, Object, RenderConfig};

/// A fixed, ordered collection of objects.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
}

impl Scene {
    /// Create a scene from a list of objects.
    pub fn new(objects: Vec<Object>) -> Self {
        Self { objects }
    }

    /// Build a scene from its description.
    pub fn from_description(desc: &SceneDescription) -> Self {
        Self::new(Object::from_description(desc))
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest object along `ray`.
    ///
    /// A candidate counts only if its `t` lies inside `config.ray_bounds`
    /// by more than `config.epsilon` on both ends and beats the current
    /// best by more than `epsilon`. On near-ties the earlier object wins.
    /// Shadow rays use the same query, so a surface point never shadows
    /// itself through roundoff.
    pub fn nearest_hit(&self, ray: &Ray, config: &RenderConfig) -> Option<Hit<'_>> {
        let bounds = config.ray_bounds;
        let mut closest: Option<Hit<'_>> = None;
        let mut closest_t = bounds.max;

        for object in &self.objects {
            let Some(t) = object.intersect(ray) else {
                continue;
            };
            if bounds.surrounds_with_margin(t, config.epsilon) && closest_t - t > config.epsilon {
                closest_t = t;
                closest = Some(Hit { object, t });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use glint_core::Material;
    use glint_math::{Color, Vec3};

    fn sphere(z: f32, radius: f32, red: i32) -> Object {
        Sphere::new(
            Vec3::new(0.0, 0.0, z),
            radius,
            Material::new(Color::new(red, 0, 0)),
        )
        .into()
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        // Far sphere listed first
        let scene = Scene::new(vec![sphere(20.0, 1.0, 1), sphere(10.0, 1.0, 2)]);
        let config = RenderConfig::default();

        let hit = scene
            .nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z), &config)
            .unwrap();
        assert_eq!(hit.object.material().color.red, 2);
        assert!((hit.t - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_nearest_hit_miss() {
        let scene = Scene::new(vec![sphere(10.0, 1.0, 1)]);
        let config = RenderConfig::default();
        assert!(scene
            .nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Y), &config)
            .is_none());
    }

    #[test]
    fn test_nearest_hit_ignores_objects_behind() {
        let scene = Scene::new(vec![sphere(-10.0, 1.0, 1)]);
        let config = RenderConfig::default();
        assert!(scene
            .nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z), &config)
            .is_none());
    }

    #[test]
    fn test_nearest_hit_rejects_self_intersection() {
        // Ray leaving the surface of the sphere it starts on
        let scene = Scene::new(vec![sphere(0.0, 1.0, 1)]);
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.nearest_hit(&ray, &config).is_none());
    }

    #[test]
    fn test_nearest_hit_respects_max_bound() {
        let scene = Scene::new(vec![sphere(50.0, 1.0, 1)]);
        let config = RenderConfig::default().with_ray_bounds(0.0, 20.0);
        assert!(scene
            .nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z), &config)
            .is_none());
    }

    #[test]
    fn test_near_tie_keeps_first_object() {
        // Second sphere is closer, but by less than epsilon
        let scene = Scene::new(vec![sphere(10.00001, 1.0, 1), sphere(10.0, 1.0, 2)]);
        let config = RenderConfig::default();
        let hit = scene
            .nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z), &config)
            .unwrap();
        assert_eq!(hit.object.material().color.red, 1);
    }

    #[test]
    fn test_from_description() {
        let scene = Scene::from_description(&SceneDescription::reference());
        assert_eq!(scene.len(), 6);
        assert!(!scene.is_empty());
    }
}
