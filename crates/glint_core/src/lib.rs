//! Glint Core - static scene descriptions.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SphereDesc`, `LightDesc`, `Material`
//! - **The reference scene**: `SceneDescription::reference()`
//! - **JSON scene files**: `load_scene` / `SceneDescription::from_json_str`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres", scene.spheres.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, SceneError, SceneResult};
pub use scene::{LightDesc, Material, SceneDescription, SphereDesc, DEFAULT_LIGHT_SAMPLES};
