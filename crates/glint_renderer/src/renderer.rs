//! Core ray tracing renderer.
//!
//! Implements a recursive Whitted-style tracer with:
//! - Soft shadows from a sampled segment light
//! - Glossy reflections with configurable depth
//! - Anti-aliasing via a regular sub-pixel grid

use glint_math::{Color, Interval};
use rand::RngCore;

use crate::{Camera, Light, RenderStats, Scene, Shader};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum reflection depth
    pub max_depth: u32,
    /// Sub-pixel grid spacing; 0.25 gives 4x4 samples per pixel
    pub antialias_step: f32,
    /// Rays averaged per reflection
    pub reflection_samples: u32,
    /// Light every surface receives regardless of shadows
    pub ambient: f32,
    /// Tolerance for hit and light comparisons
    pub epsilon: f32,
    /// Valid range of the ray parameter
    pub ray_bounds: Interval,
    /// Cap on direct light intensity at a point
    pub max_light: f32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            antialias_step: 0.25,
            reflection_samples: 3,
            ambient: 0.2,
            epsilon: 1e-4,
            ray_bounds: Interval::new(0.0, 1_000_000.0),
            max_light: 0.8,
            background: Color::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_antialias_step(mut self, step: f32) -> Self {
        self.antialias_step = step;
        self
    }

    pub fn with_reflection_samples(mut self, samples: u32) -> Self {
        self.reflection_samples = samples;
        self
    }

    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_ray_bounds(mut self, min: f32, max: f32) -> Self {
        self.ray_bounds = Interval::new(min, max);
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Offsets of the sub-pixel samples along one axis: `0, step, 2*step, ...`
    /// while below 1.
    ///
    /// `antialias_step` must be positive.
    pub fn subpixel_offsets(&self) -> Vec<f32> {
        let step = self.antialias_step;
        debug_assert!(step > 0.0, "antialias step must be positive");

        let count = (1.0 / step).ceil() as usize;
        (0..count)
            .map(|i| i as f32 * step)
            .filter(|&offset| offset < 1.0)
            .collect()
    }

    /// Sub-pixel samples per pixel.
    pub fn samples_per_pixel(&self) -> usize {
        self.subpixel_offsets().len().pow(2)
    }
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with white.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE; Self::pixel_count(width, height)],
        }
    }

    /// Number of pixels in a `width` x `height` image.
    pub fn pixel_count(width: u32, height: u32) -> usize {
        width as usize * height as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Set the pixel at row-major `index`.
    pub fn put(&mut self, index: usize, color: Color) {
        self.pixels[index] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

/// Render a single pixel with sub-pixel supersampling.
///
/// Each sample color is weighted by `step^2` and the channel sums are
/// truncated, so a full grid of equal samples reproduces that color.
pub fn render_pixel(
    camera: &Camera,
    shader: &Shader<'_>,
    col: u32,
    row: u32,
    rng: &mut dyn RngCore,
    stats: &mut RenderStats,
) -> Color {
    let config = shader.config;
    let step = config.antialias_step;
    let offsets = config.subpixel_offsets();
    let (x, y) = camera.pixel_position(col, row);

    let (mut red, mut green, mut blue) = (0.0_f32, 0.0_f32, 0.0_f32);

    for &dy in &offsets {
        for &dx in &offsets {
            let ray = camera.get_ray(x + dx, y + dy);
            stats.primary_rays += 1;
            let color = shader.ray_color(&ray, config.max_depth, rng, stats);

            red += color.red as f32 * step * step;
            green += color.green as f32 * step * step;
            blue += color.blue as f32 * step * step;
        }
    }

    Color::new(red as i32, green as i32, blue as i32)
}

/// Render the entire scene into `image`.
///
/// Pixels are written once each in row-major order. Single-threaded; the
/// same seed always produces the same image.
pub fn render(
    image: &mut ImageBuffer,
    scene: &Scene,
    light: &Light,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderStats {
    let camera = Camera::new(image.width, image.height);
    let shader = Shader::new(scene, light, config);
    let mut stats = RenderStats::new();

    log::info!(
        "Rendering {}x{} @ {} spp, {} objects, {} light samples",
        image.width,
        image.height,
        config.samples_per_pixel(),
        scene.len(),
        light.sample_count()
    );

    let mut index = 0;
    for row in 0..image.height {
        if row % 100 == 0 {
            log::debug!("Row {}/{}", row, image.height);
        }

        for col in 0..image.width {
            let color = render_pixel(&camera, &shader, col, row, rng, &mut stats);
            image.put(index, color);
            index += 1;
        }
    }

    log::info!("Render finished: {}", stats);
    stats
}
