use std::path::PathBuf;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use glint_core::{load_scene, SceneDescription};
use glint_renderer::{output, render, ImageBuffer, Light, RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Render a sphere scene with soft shadows and glossy reflections.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Image width in pixels.
    #[arg(long, default_value_t = 1500)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Output file; `.ppm` is written as plain-text PPM, other
    /// extensions go through the image encoder.
    #[arg(long, short = 'o', value_name = "FILE", default_value = "picture.ppm")]
    output: PathBuf,

    /// JSON scene file. Renders the built-in scene when omitted.
    #[arg(long, short = 's', value_name = "FILE")]
    scene: Option<PathBuf>,

    /// Seed for gloss jitter. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum reflection depth.
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Sub-pixel sample spacing, in (0, 1].
    #[arg(long, default_value_t = 0.25)]
    antialias: f32,

    /// Rays averaged per reflection.
    #[arg(long, default_value_t = 3)]
    reflection_samples: u32,
}

impl Options {
    fn render_config(&self) -> Result<RenderConfig> {
        ensure!(
            self.antialias > 0.0 && self.antialias <= 1.0,
            "--antialias must be in (0, 1], got {}",
            self.antialias
        );

        Ok(RenderConfig::default()
            .with_max_depth(self.depth)
            .with_antialias_step(self.antialias)
            .with_reflection_samples(self.reflection_samples))
    }

    fn scene_description(&self) -> Result<SceneDescription> {
        match &self.scene {
            Some(path) => load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display())),
            None => Ok(SceneDescription::reference()),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    let config = options.render_config()?;
    let desc = options.scene_description()?;

    let scene = Scene::from_description(&desc);
    let light = Light::from_desc(&desc.light);
    let mut rng = options.rng();
    let mut image = ImageBuffer::new(options.width, options.height);

    let start = Instant::now();
    let stats = render(&mut image, &scene, &light, &config, &mut rng);
    log::info!("Rendered in {:?} ({} rays)", start.elapsed(), stats.total_rays());

    output::save(&image, &options.output)
        .with_context(|| format!("Failed to save {}", options.output.display()))?;

    Ok(())
}
