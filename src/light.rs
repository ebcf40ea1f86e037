//! Lighting for flat shading.

use crate::math::vec3::Vec3;

/// A directional light: all rays are parallel, as from a distant source.
///
/// The default light points along `+Z`, matching the fixed light the
/// renderer shades against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a light pointing in the given direction.
    /// The direction is normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
        }
    }

    /// Signed flat-shading intensity for a surface normal.
    ///
    /// The result is the raw dot product: positive values scale the
    /// shade, a negative value marks the surface as facing away from the
    /// light, which the rasterizer uses to cull the whole triangle.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::FORWARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normal_toward_light_has_full_intensity() {
        let light = DirectionalLight::default();
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, 1.0)), 1.0);
    }

    #[test]
    fn normal_away_from_light_is_negative() {
        let light = DirectionalLight::default();
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), -1.0);
    }

    #[test]
    fn angled_normal_scales_by_cosine() {
        let light = DirectionalLight::default();
        let normal = Vec3::new(0.0, 1.0, 1.0).normalize();
        // cos(45 degrees)
        assert_relative_eq!(light.intensity(normal), 0.707, epsilon = 1e-3);
    }

    #[test]
    fn new_normalizes_direction() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 10.0));
        assert_relative_eq!(light.direction.magnitude(), 1.0, epsilon = 1e-6);
    }
}
