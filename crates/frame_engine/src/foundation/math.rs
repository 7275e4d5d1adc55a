//! Math utilities and types
//!
//! Provides fundamental math types for 3D game development.

pub use nalgebra::{
    Vector3, Vector4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,
    
    /// Rotation quaternion
    pub rotation: Quat,
    
    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }
    
    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
    
    /// Move the transform by `offset`
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
    
    /// Rotate by a scaled axis (axis * angle in radians), applied in world space
    pub fn rotate_scaled_axis(&mut self, scaled_axis: Vec3) {
        self.rotation = Quat::from_scaled_axis(scaled_axis) * self.rotation;
    }
}

/// Math utility functions
pub mod utils {
    use super::Vec3;
    
    /// Clamp every component of `point` into the box `[min, max]`
    pub fn clamp_to_box(point: Vec3, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            point.x.min(max.x).max(min.x),
            point.y.min(max.y).max(min.y),
            point.z.min(max.z).max(min.z),
        )
    }
    
    /// Unit vector along `axis` (0 = X, 1 = Y, 2 = Z) pointing in the sign of `direction`
    ///
    /// A non-positive `direction` yields the negative axis.
    pub fn signed_axis(axis: usize, direction: f32) -> Vec3 {
        let mut normal = Vec3::zeros();
        normal[axis] = if direction > 0.0 { 1.0 } else { -1.0 };
        normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    
    #[test]
    fn test_clamp_to_box() {
        let min = Vec3::new(-1.0, -1.0, -1.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        
        let clamped = utils::clamp_to_box(Vec3::new(3.0, 0.5, -7.0), min, max);
        assert_relative_eq!(clamped, Vec3::new(1.0, 0.5, -1.0));
    }
    
    #[test]
    fn test_signed_axis_zero_direction_is_negative() {
        assert_eq!(utils::signed_axis(1, 2.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(utils::signed_axis(2, 0.0), Vec3::new(0.0, 0.0, -1.0));
    }
    
    #[test]
    fn test_rotate_scaled_axis() {
        let mut transform = Transform::identity();
        transform.rotate_scaled_axis(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        
        let rotated = transform.rotation * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotated, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    }
}
