//! Ray counters collected while rendering.

use std::fmt;

/// Counts of the rays traced during a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Camera rays, one per sub-pixel sample
    pub primary_rays: u64,
    /// Occlusion tests towards light samples
    pub shadow_rays: u64,
    /// Secondary rays spawned by reflective surfaces
    pub reflection_rays: u64,
    /// Deepest reflection level reached; camera rays are level 0
    pub deepest_bounce: u32,
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a ray at reflection level `level` was traced.
    #[inline]
    pub fn record_bounce(&mut self, level: u32) {
        self.deepest_bounce = self.deepest_bounce.max(level);
    }

    /// Total rays of every kind.
    pub fn total_rays(&self) -> u64 {
        self.primary_rays + self.shadow_rays + self.reflection_rays
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rays ({} primary, {} shadow, {} reflection), deepest bounce {}",
            self.total_rays(),
            self.primary_rays,
            self.shadow_rays,
            self.reflection_rays,
            self.deepest_bounce
        )
    }
}
