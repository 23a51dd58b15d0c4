/// A closed range of ray parameters `[min, max]`.
///
/// Used to bound intersection queries: primary rays search `[0, inf)`,
/// shadow rays stop at the light.
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

    /// Everything in front of the ray origin, `[0, inf)`.
    pub fn forward() -> Self {
        Self::new(0.0, f32::INFINITY)
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is at least `min` and strictly below `max`.
    pub fn contains_half_open(&self, x: f32) -> bool {
        self.min <= x && x < self.max
    }

    /// Same interval with `max` replaced.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}
