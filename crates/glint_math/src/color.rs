//! Integer RGB color.

use std::ops::{Add, AddAssign, Div, Mul};

use serde::{Deserialize, Serialize};

/// An RGB color with integer channels.
///
/// Channels are conventionally in `[0, 255]` but nothing here enforces it:
/// arithmetic can push a channel out of range and it stays there until a
/// sink decides what to do with it. Scaling truncates toward zero.
///
/// Serialized as a `[red, green, blue]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color.
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Channels saturated to `[0, 255]`, for formats that cannot hold
    /// anything else.
    pub fn clamped_rgb(&self) -> [u8; 3] {
        [
            self.red.clamp(0, 255) as u8,
            self.green.clamp(0, 255) as u8,
            self.blue.clamp(0, 255) as u8,
        ]
    }
}

impl From<[i32; 3]> for Color {
    fn from([red, green, blue]: [i32; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Color> for [i32; 3] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(
            self.red + rhs.red,
            self.green + rhs.green,
            self.blue + rhs.blue,
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, k: f32) -> Color {
        Color::new(
            (self.red as f32 * k) as i32,
            (self.green as f32 * k) as i32,
            (self.blue as f32 * k) as i32,
        )
    }
}

impl Div<i32> for Color {
    type Output = Color;

    fn div(self, n: i32) -> Color {
        Color::new(self.red / n, self.green / n, self.blue / n)
    }
}
