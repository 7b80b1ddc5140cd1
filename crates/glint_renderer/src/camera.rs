//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// A pinhole camera at the origin looking down +z.
///
/// The image plane sits at `focal_distance`, which is the mean of the
/// image width and height. One pixel covers one unit of the image plane
/// and the image center is on the optical axis.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    origin: Vec3,
    focal_distance: f32,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            origin: Vec3::ZERO,
            focal_distance: (image_width as f32 + image_height as f32) / 2.0,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn focal_distance(&self) -> f32 {
        self.focal_distance
    }

    /// Camera-space coordinates of the top-left corner of pixel
    /// (`col`, `row`), with the image center at (0, 0) and y growing
    /// downwards like image rows.
    pub fn pixel_position(&self, col: u32, row: u32) -> (f32, f32) {
        let x = col as i64 - (self.image_width / 2) as i64;
        let y = row as i64 - (self.image_height / 2) as i64;
        (x as f32, y as f32)
    }

    /// Unit-direction ray through camera-space point (`x`, `y`).
    ///
    /// `y` is flipped so that larger row coordinates look further down.
    pub fn get_ray(&self, x: f32, y: f32) -> Ray {
        let direction = Vec3::new(x, -y, self.focal_distance).normalize();
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_distance() {
        let camera = Camera::new(1500, 1000);
        assert_eq!(camera.focal_distance(), 1250.0);
        assert_eq!(camera.origin(), Vec3::ZERO);
    }

    #[test]
    fn test_pixel_position_is_centered() {
        let camera = Camera::new(4, 2);
        assert_eq!(camera.pixel_position(0, 0), (-2.0, -1.0));
        assert_eq!(camera.pixel_position(2, 1), (0.0, 0.0));
        assert_eq!(camera.pixel_position(3, 1), (1.0, 0.0));
    }

    #[test]
    fn test_pixel_position_odd_size() {
        let camera = Camera::new(3, 3);
        assert_eq!(camera.pixel_position(0, 0), (-1.0, -1.0));
        assert_eq!(camera.pixel_position(2, 2), (1.0, 1.0));
    }

    #[test]
    fn test_get_ray_direction() {
        let camera = Camera::new(100, 100);

        let center = camera.get_ray(0.0, 0.0);
        assert_eq!(center.direction(), Vec3::Z);

        // Top rows (negative y) look up
        let top = camera.get_ray(0.0, -50.0);
        assert!(top.direction().y > 0.0);
        assert!((top.direction().length() - 1.0).abs() < 1e-5);

        let right = camera.get_ray(50.0, 0.0);
        assert!(right.direction().x > 0.0);
    }
}
