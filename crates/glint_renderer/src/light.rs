//! Extended segment light.

use glint_core::{LightDesc, DEFAULT_LIGHT_SAMPLES};
use glint_math::Vec3;

/// A light spread along the segment from `left` to `right`.
///
/// The segment is discretized once at construction into evenly spaced
/// sample points. Shading treats every sample as a point light and sums
/// their contributions, which is where soft shadow edges come from.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    left: Vec3,
    right: Vec3,
    intensity: f32,
    samples: Vec<Vec3>,
}

impl Light {
    /// Create a light with the default number of samples.
    pub fn new(left: Vec3, right: Vec3, intensity: f32) -> Self {
        Self::with_samples(left, right, intensity, DEFAULT_LIGHT_SAMPLES)
    }

    /// Create a light split into `count` samples.
    ///
    /// Sample `i` sits at `left + (right - left) * i / count`, so the last
    /// one stops a step short of `right`.
    pub fn with_samples(left: Vec3, right: Vec3, intensity: f32, count: usize) -> Self {
        let span = right - left;
        let samples = (0..count)
            .map(|i| left + span * (i as f32 / count as f32))
            .collect();

        Self {
            left,
            right,
            intensity,
            samples,
        }
    }

    /// Build a light from its scene description.
    pub fn from_desc(desc: &LightDesc) -> Self {
        Self::with_samples(desc.left, desc.right, desc.intensity, desc.samples)
    }

    pub fn left(&self) -> Vec3 {
        self.left
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Intensity contributed by each sample.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Get sample point `i`.
    ///
    /// Panics if `i >= sample_count()`.
    pub fn sample(&self, i: usize) -> Vec3 {
        self.samples[i]
    }

    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }
}
