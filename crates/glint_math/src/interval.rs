/// A closed range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x lies inside the interval by more than `epsilon`
    /// on both ends.
    ///
    /// Values within `epsilon` of either bound count as outside, which keeps
    /// rays leaving a surface from re-hitting it through roundoff.
    pub fn surrounds_with_margin(&self, x: f32, epsilon: f32) -> bool {
        x - self.min > epsilon && self.max - x > epsilon
    }
}
