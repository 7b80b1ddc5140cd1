//! Local illumination and recursive reflections.

use glint_core::Material;
use glint_math::{reflect, Color, Ray, Vec3};
use rand::RngCore;

use crate::{gen_f32, Light, RenderConfig, RenderStats, Scene};

/// Everything a ray needs to be shaded: the scene it travels through,
/// the light, and the render settings.
#[derive(Clone, Copy)]
pub struct Shader<'a> {
    pub scene: &'a Scene,
    pub light: &'a Light,
    pub config: &'a RenderConfig,
}

impl<'a> Shader<'a> {
    pub fn new(scene: &'a Scene, light: &'a Light, config: &'a RenderConfig) -> Self {
        Self {
            scene,
            light,
            config,
        }
    }

    /// Light intensity arriving at `point` and leaving towards `view`.
    ///
    /// Every light sample is tested for occlusion on its own. A blocked
    /// sample adds nothing; an unblocked one adds a Lambert term and, for
    /// materials with a specular exponent, a Phong highlight. The sum is
    /// capped at `config.max_light`.
    ///
    /// `normal` must be unit length. `view` points from the surface back
    /// along the incoming ray and may have any length.
    pub fn compute_light(
        &self,
        point: Vec3,
        normal: Vec3,
        view: Vec3,
        material: &Material,
        stats: &mut RenderStats,
    ) -> f32 {
        let epsilon = self.config.epsilon;
        let light_intensity = self.light.intensity();
        let mut intensity = 0.0;

        for &sample in self.light.samples() {
            let light_dir = (sample - point).normalize();

            stats.shadow_rays += 1;
            if self
                .scene
                .nearest_hit(&Ray::new(point, light_dir), self.config)
                .is_some()
            {
                continue;
            }

            // Diffuse
            let n = normal.dot(light_dir);
            if n > epsilon {
                intensity += light_intensity * n / (normal.length() * light_dir.length());
            }

            // Specular
            if material.specular != 0 {
                let reflection = reflect(light_dir, normal).normalize();
                let r = reflection.dot(view);
                if r > epsilon {
                    intensity += light_intensity
                        * (r / (reflection.length() * view.length())).powi(material.specular);
                }
            }
        }

        if intensity > self.config.max_light {
            self.config.max_light
        } else {
            intensity
        }
    }

    /// Color seen along `ray`, following up to `depth` reflections.
    ///
    /// Reflective surfaces spawn `config.reflection_samples` mirror rays,
    /// each jittered by a random unit vector scaled by the material's
    /// gloss, and blend their average in by the material's reflectivity.
    pub fn ray_color(
        &self,
        ray: &Ray,
        depth: u32,
        rng: &mut dyn RngCore,
        stats: &mut RenderStats,
    ) -> Color {
        stats.record_bounce(self.config.max_depth.saturating_sub(depth));

        let Some(hit) = self.scene.nearest_hit(ray, self.config) else {
            return self.config.background;
        };

        let material = hit.object.material();
        let point = hit.point(ray);
        let normal = hit.object.normal_at(point).normalize();
        let view = -ray.direction();

        let lighting = self.compute_light(point, normal, view, material, stats);
        let local = material.color * (lighting + self.config.ambient);

        if depth == 0 || material.reflective < 0.0 {
            return local;
        }

        let mut reflected = Color::BLACK;
        if material.reflective != 0.0 {
            let samples = self.config.reflection_samples as i32;
            let mirror = reflect(view, normal);

            for _ in 0..samples {
                let direction = mirror + random_unit_vector(rng) * material.gloss;
                stats.reflection_rays += 1;
                let color = self.ray_color(&Ray::new(point, direction), depth - 1, rng, stats);
                reflected += color / samples;
            }
        }

        local * (1.0 - material.reflective) + reflected * material.reflective
    }
}

/// Random unit vector in the positive octant.
///
/// Components are drawn uniformly from `[0, 1)` and normalized, so gloss
/// always nudges reflections towards +x, +y and +z.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let v = Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng));
        if v.length_squared() > 1e-12 {
            return v.normalize();
        }
    }
}
