use crt_math::{Color, Vec3};

/// An omnidirectional point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Position of the light in world space
    pub position: Vec3,
    /// Emitted power, spread over the sphere around the light (>= 0)
    pub intensity: f32,
    /// Tint of the emitted light
    pub albedo: Color,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 0.0),
            intensity: 1000.0,
            albedo: Color::new(0.9, 0.9, 0.9),
        }
    }
}

impl Light {
    /// Create a light with the default tint.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
            ..Default::default()
        }
    }

    /// Set the light tint.
    pub fn with_albedo(mut self, albedo: Color) -> Self {
        self.albedo = albedo;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_defaults() {
        let light = Light::default();
        assert_eq!(light.position, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(light.intensity, 1000.0);
        assert_eq!(light.albedo, Color::splat(0.9));
    }

    #[test]
    fn test_light_builder() {
        let light = Light::new(Vec3::ONE, 50.0).with_albedo(Color::X);
        assert_eq!(light.position, Vec3::ONE);
        assert_eq!(light.intensity, 50.0);
        assert_eq!(light.albedo, Color::X);
    }
}
