//! End-to-end rendering tests.

use glint_core::{Material, SceneDescription};
use glint_renderer::{
    output::write_ppm, render, Color, ImageBuffer, Light, Object, Ray, RenderConfig, RenderStats,
    Scene, Shader, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn single_sphere_scene(center: Vec3, radius: f32, color: Color) -> Scene {
    Scene::new(vec![Object::from(Sphere::new(
        center,
        radius,
        Material::new(color),
    ))])
}

/// Bright bar light next to the camera, facing the sphere.
fn front_light() -> Light {
    Light::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0), 1.0)
}

#[test]
fn test_matte_sphere_filling_frame() {
    let _ = env_logger::builder().is_test(true).try_init();

    let color = Color::new(200, 100, 50);
    let scene = single_sphere_scene(Vec3::new(0.0, 0.0, 10.0), 8.0, color);
    let light = front_light();
    let config = RenderConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    let mut image = ImageBuffer::new(2, 2);
    let stats = render(&mut image, &scene, &light, &config, &mut rng);

    // Direct light saturates at 0.8, plus 0.2 ambient
    for &pixel in image.pixels() {
        assert_eq!(pixel, color);
    }
    assert_eq!(stats.primary_rays, 4 * 16);
    assert_eq!(stats.reflection_rays, 0);
    assert_eq!(stats.deepest_bounce, 0);
}

#[test]
fn test_dim_sphere_among_background_pixels() {
    let color = Color::new(200, 100, 50);
    let scene = single_sphere_scene(Vec3::new(0.0, 0.0, 10.0), 1.0, color);
    // One sample at the camera, well below the direct-light cap
    let light = Light::with_samples(Vec3::ZERO, Vec3::ZERO, 0.3, 1);
    let config = RenderConfig::default().with_antialias_step(1.0);
    let mut rng = StdRng::seed_from_u64(7);

    let mut image = ImageBuffer::new(2, 2);
    let stats = render(&mut image, &scene, &light, &config, &mut rng);

    // Only the bottom-right pixel looks down the axis at the sphere,
    // lit head-on: 0.3 diffuse plus 0.2 ambient
    assert_eq!(
        image.pixels(),
        &[Color::BLACK, Color::BLACK, Color::BLACK, color * 0.5]
    );
    assert_eq!(image.get(1, 1), Color::new(100, 50, 25));
    assert_eq!(stats.primary_rays, 4);
    assert_eq!(stats.shadow_rays, 1);
}

#[test]
fn test_empty_view_is_black() {
    // Sphere behind the camera
    let scene = single_sphere_scene(Vec3::new(0.0, 0.0, -10.0), 2.0, Color::WHITE);
    let light = front_light();
    let config = RenderConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    let mut image = ImageBuffer::new(2, 2);
    render(&mut image, &scene, &light, &config, &mut rng);

    assert!(image.pixels().iter().all(|&c| c == Color::BLACK));

    let mut out = Vec::new();
    write_ppm(&image, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "P3\n2 2\n255\n0 0 0\n0 0 0\n0 0 0\n0 0 0\n"
    );
}

#[test]
fn test_same_seed_same_image() {
    let desc = SceneDescription::reference();
    let scene = Scene::from_description(&desc);
    let light = Light::from_desc(&desc.light);
    let config = RenderConfig::default().with_antialias_step(0.5);

    let render_once = || {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut image = ImageBuffer::new(24, 16);
        let stats = render(&mut image, &scene, &light, &config, &mut rng);
        (image, stats)
    };

    let (first, first_stats) = render_once();
    let (second, second_stats) = render_once();

    assert_eq!(first, second);
    assert_eq!(first_stats, second_stats);

    let mut first_bytes = Vec::new();
    let mut second_bytes = Vec::new();
    write_ppm(&first, &mut first_bytes).unwrap();
    write_ppm(&second, &mut second_bytes).unwrap();
    assert_eq!(first_bytes, second_bytes);

    assert!(first_stats.deepest_bounce <= config.max_depth);
}

#[test]
fn test_facing_mirrors_stop_at_max_depth() {
    let mirror = Material::new(Color::new(180, 180, 180)).with_reflective(0.5);
    let scene = Scene::new(vec![
        Object::from(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, mirror)),
        Object::from(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mirror)),
    ]);
    let light = Light::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 10.0, 0.0), 0.05);
    let config = RenderConfig::default();
    let shader = Shader::new(&scene, &light, &config);
    let mut rng = StdRng::seed_from_u64(99);
    let mut stats = RenderStats::new();

    shader.ray_color(
        &Ray::new(Vec3::ZERO, Vec3::Z),
        config.max_depth,
        &mut rng,
        &mut stats,
    );

    // Every bounce hits the opposite mirror, so recursion runs to the limit
    assert_eq!(stats.deepest_bounce, 5);
    assert_eq!(stats.reflection_rays, 3 + 9 + 27 + 81 + 243);
}

#[test]
fn test_glossy_mirrors_stop_at_max_depth() {
    let glossy = Material::new(Color::WHITE)
        .with_reflective(0.7)
        .with_gloss(0.1);
    // Two nearly flat mirrors ten units apart; jittered rays still land
    // on the opposite one
    let scene = Scene::new(vec![
        Object::from(Sphere::new(Vec3::new(0.0, 0.0, 1005.0), 1000.0, glossy)),
        Object::from(Sphere::new(Vec3::new(0.0, 0.0, -1005.0), 1000.0, glossy)),
    ]);
    let light = Light::new(Vec3::new(-1.0, 3.0, 0.0), Vec3::new(1.0, 3.0, 0.0), 0.05);
    let config = RenderConfig::default();
    let shader = Shader::new(&scene, &light, &config);
    let mut rng = StdRng::seed_from_u64(5);
    let mut stats = RenderStats::new();

    shader.ray_color(
        &Ray::new(Vec3::ZERO, Vec3::Z),
        config.max_depth,
        &mut rng,
        &mut stats,
    );

    assert_eq!(stats.deepest_bounce, config.max_depth);
    assert_eq!(stats.reflection_rays, 3 + 9 + 27 + 81 + 243);
}
