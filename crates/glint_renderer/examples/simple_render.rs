//! Simple ray tracer example.
//!
//! Renders a small version of the built-in scene and saves it as PPM.

use anyhow::Context;
use glint_renderer::{output, render, ImageBuffer, Light, RenderConfig, Scene, SceneDescription};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let desc = SceneDescription::reference();
    let scene = Scene::from_description(&desc);
    let light = Light::from_desc(&desc.light);
    println!("Scene has {} objects", scene.len());

    let config = RenderConfig::default().with_antialias_step(0.5);
    let mut image = ImageBuffer::new(300, 200);
    let mut rng = StdRng::seed_from_u64(42);

    println!(
        "Rendering {}x{} @ {} spp...",
        image.width,
        image.height,
        config.samples_per_pixel()
    );

    let start = std::time::Instant::now();
    let stats = render(&mut image, &scene, &light, &config, &mut rng);
    println!("Rendered in {:?}: {}", start.elapsed(), stats);

    let filename = "output.ppm";
    output::save(&image, filename).with_context(|| format!("failed to save {filename}"))?;
    println!("Saved to {}", filename);

    Ok(())
}
