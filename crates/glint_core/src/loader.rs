//! Scene file loading.
//!
//! Scenes are stored as JSON:
//!
//! ```json
//! {
//!   "spheres": [
//!     { "center": [0.0, 0.0, 10.0], "radius": 2.0,
//!       "material": { "color": [255, 0, 0], "specular": 500, "reflective": 0.2 } }
//!   ],
//!   "light": { "left": [-10.0, 10.0, 0.0], "right": [10.0, 10.0, 0.0], "intensity": 0.05 }
//! }
//! ```
//!
//! Vectors are `[x, y, z]` arrays and colors are `[r, g, b]` arrays.

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Scene contains no spheres")]
    Empty,

    #[error("Invalid sphere #{index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Invalid light: {0}")]
    InvalidLight(String),
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = SceneDescription::from_json_str(&text)?;

    log::info!(
        "Loaded scene {} ({} spheres)",
        path.display(),
        scene.spheres.len()
    );

    Ok(scene)
}

impl SceneDescription {
    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(text: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the scene for geometry the renderer cannot handle.
    ///
    /// Out-of-range material values are legal and only logged.
    pub fn validate(&self) -> SceneResult<()> {
        if self.spheres.is_empty() {
            return Err(SceneError::Empty);
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("center {:?} is not finite", sphere.center),
                });
            }
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("radius {} must be positive", sphere.radius),
                });
            }

            let reflective = sphere.material.reflective;
            if reflective > 1.0 {
                log::warn!("Sphere #{index} reflects more than it receives ({reflective})");
            } else if reflective < 0.0 {
                log::warn!("Sphere #{index} has negative reflectivity, reflections disabled");
            }
        }

        let light = &self.light;
        if !(light.left.is_finite() && light.right.is_finite()) {
            return Err(SceneError::InvalidLight(
                "endpoints must be finite".to_string(),
            ));
        }
        if light.samples == 0 {
            return Err(SceneError::InvalidLight(
                "sample count must be at least 1".to_string(),
            ));
        }
        if !light.intensity.is_finite() {
            return Err(SceneError::InvalidLight(format!(
                "intensity {} is not finite",
                light.intensity
            )));
        }

        Ok(())
    }
}
