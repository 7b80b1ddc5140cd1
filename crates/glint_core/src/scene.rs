//! Scene description types.
//!
//! A scene is a fixed, ordered list of spheres plus a single extended light.
//! These types are plain data; the renderer builds its own runtime
//! representation from them.

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Number of points a light segment is split into by default.
pub const DEFAULT_LIGHT_SAMPLES: usize = 25;

/// Surface appearance shared by every renderable object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color (0-255 per channel)
    pub color: Color,

    /// Phong exponent; 0 disables highlights
    #[serde(default)]
    pub specular: i32,

    /// Fraction of the final color taken from reflections.
    /// Negative values switch reflections off entirely.
    #[serde(default)]
    pub reflective: f32,

    /// Length of the random jitter added to reflected rays
    #[serde(default)]
    pub gloss: f32,
}

impl Material {
    /// A matte material of the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular: 0,
            reflective: 0.0,
            gloss: 0.0,
        }
    }

    pub fn with_specular(mut self, specular: i32) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_reflective(mut self, reflective: f32) -> Self {
        self.reflective = reflective;
        self
    }

    pub fn with_gloss(mut self, gloss: f32) -> Self {
        self.gloss = gloss;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

/// A sphere definition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl SphereDesc {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

fn default_light_samples() -> usize {
    DEFAULT_LIGHT_SAMPLES
}

/// An extended light: a segment from `left` to `right`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    pub left: Vec3,
    pub right: Vec3,
    pub intensity: f32,

    /// How many points the segment is split into
    #[serde(default = "default_light_samples")]
    pub samples: usize,
}

impl LightDesc {
    pub fn new(left: Vec3, right: Vec3, intensity: f32) -> Self {
        Self {
            left,
            right,
            intensity,
            samples: DEFAULT_LIGHT_SAMPLES,
        }
    }
}

/// Everything needed to build a renderable scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Spheres in query order
    pub spheres: Vec<SphereDesc>,
    pub light: LightDesc,
}

impl SceneDescription {
    /// Create a scene description from spheres and a light.
    pub fn new(spheres: Vec<SphereDesc>, light: LightDesc) -> Self {
        Self { spheres, light }
    }

    /// The built-in scene: a sand floor, a mirror sphere, a glossy sphere
    /// and three small purple spheres in front of them, lit by a long bar
    /// light high above the camera.
    pub fn reference() -> Self {
        let white = Color::new(255, 255, 255);
        let sand = Color::new(255, 255, 224);
        let purple = Color::new(148, 0, 210);

        let small = Material::new(purple).with_specular(500).with_reflective(0.1);

        let spheres = vec![
            // Floor is a giant sphere
            SphereDesc::new(
                Vec3::new(0.0, -5001.0, 0.0),
                5000.0,
                Material::new(sand).with_specular(1000),
            ),
            // Mirror
            SphereDesc::new(
                Vec3::new(2.5, 1.0, 10.0),
                1.9,
                Material::new(white).with_specular(1000).with_reflective(0.8),
            ),
            // Rough mirror
            SphereDesc::new(
                Vec3::new(-2.5, 1.0, 10.0),
                1.9,
                Material::new(white)
                    .with_specular(1000)
                    .with_reflective(0.5)
                    .with_gloss(0.1),
            ),
            SphereDesc::new(Vec3::new(-1.0, -0.5, 5.0), 0.3, small),
            SphereDesc::new(Vec3::new(0.0, -0.5, 5.0), 0.3, small),
            SphereDesc::new(Vec3::new(1.0, -0.5, 5.0), 0.3, small),
        ];

        let light = LightDesc::new(
            Vec3::new(-100.0, 10.0, 0.0),
            Vec3::new(100.0, 10.0, 0.0),
            0.05,
        );

        Self::new(spheres, light)
    }
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self::reference()
    }
}
