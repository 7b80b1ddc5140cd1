//! Glint Renderer - CPU recursive ray tracing
//!
//! A Whitted-style ray tracer for sphere scenes lit by a segment light:
//! soft shadows from the light's sample grid, Phong highlights, glossy
//! recursive reflections and box-filtered supersampling.

mod camera;
mod light;
mod object;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod stats;
pub mod output;

pub use camera::Camera;
pub use light::Light;
pub use object::{Hit, Object};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig};
pub use scene::Scene;
pub use shading::{random_unit_vector, Shader};
pub use sphere::Sphere;
pub use stats::RenderStats;

/// Re-export math and scene description types
pub use glint_core::{Material, SceneDescription};
pub use glint_math::{Color, Interval, Ray, Vec3};

use rand::{Rng, RngCore};

/// Draw a uniform `f32` in `[0, 1)`.
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}
