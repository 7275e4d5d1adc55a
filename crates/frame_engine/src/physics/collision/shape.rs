//! High-level collision shape abstractions
//!
//! Shapes are stored in model space (sizes only) and placed in world space
//! on demand from the owner's live position.

use crate::foundation::math::Vec3;
use super::primitives::{Aabb, BoundingSphere, Contact};

/// Shape type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderType {
    /// Sphere
    Sphere,
    /// Axis-aligned bounding box
    Aabb,
    /// Oriented bounding box (not tested yet)
    OrientedBox,
    /// Capsule (not tested yet)
    Capsule,
}

/// Collision shape types (stored in MODEL SPACE)
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderShape {
    /// Sphere of the given radius
    Sphere {
        /// Radius (non-negative)
        radius: f32,
    },
    /// Axis-aligned box of the given full size
    Aabb {
        /// Full size on each axis
        size: Vec3,
    },
    /// Oriented box; reserved, never collides
    OrientedBox {
        /// Full size on each local axis
        size: Vec3,
    },
    /// Capsule along the local Y axis; reserved, never collides
    Capsule {
        /// Radius of the rounded ends
        radius: f32,
        /// Total height including both ends
        height: f32,
    },
}

impl ColliderShape {
    /// Creates a spherical collision shape with given radius
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius: radius.max(0.0) }
    }
    
    /// Creates a box collision shape with given full size
    pub fn aabb(size: Vec3) -> Self {
        Self::Aabb { size }
    }
    
    /// Type tag of this shape
    pub fn collider_type(&self) -> ColliderType {
        match self {
            Self::Sphere { .. } => ColliderType::Sphere,
            Self::Aabb { .. } => ColliderType::Aabb,
            Self::OrientedBox { .. } => ColliderType::OrientedBox,
            Self::Capsule { .. } => ColliderType::Capsule,
        }
    }
    
    /// Place this shape at `center`
    ///
    /// Returns `None` for shapes without a narrow-phase implementation.
    pub fn to_world_space(&self, center: Vec3) -> Option<WorldSpaceShape> {
        match self {
            Self::Sphere { radius } => Some(WorldSpaceShape::Sphere(BoundingSphere::new(center, *radius))),
            Self::Aabb { size } => Some(WorldSpaceShape::Aabb(Aabb::from_center_size(center, *size))),
            Self::OrientedBox { .. } | Self::Capsule { .. } => None,
        }
    }
}

/// World-space collision shape (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldSpaceShape {
    /// World-space sphere
    Sphere(BoundingSphere),
    /// World-space box
    Aabb(Aabb),
}

impl WorldSpaceShape {
    /// Get center position
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.center,
            Self::Aabb(aabb) => aabb.center,
        }
    }
    
    /// Narrow-phase test of `self` against `other`
    ///
    /// The pair test is chosen by the other shape's kind. A box testing a
    /// sphere reuses the sphere's test and flips the normal back to our side.
    pub fn contact(&self, other: &WorldSpaceShape) -> Option<Contact> {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => a.contact_sphere(b),
            (Self::Sphere(sphere), Self::Aabb(aabb)) => sphere.contact_aabb(aabb),
            (Self::Aabb(a), Self::Aabb(b)) => a.contact_aabb(b),
            (Self::Aabb(aabb), Self::Sphere(sphere)) => sphere.contact_aabb(aabb).map(Contact::flipped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    
    #[test]
    fn test_type_tags() {
        assert_eq!(ColliderShape::sphere(1.0).collider_type(), ColliderType::Sphere);
        assert_eq!(ColliderShape::aabb(Vec3::zeros()).collider_type(), ColliderType::Aabb);
        assert_eq!(
            ColliderShape::Capsule { radius: 0.5, height: 2.0 }.collider_type(),
            ColliderType::Capsule
        );
    }
    
    #[test]
    fn test_negative_radius_clamped() {
        assert_eq!(ColliderShape::sphere(-3.0), ColliderShape::Sphere { radius: 0.0 });
    }
    
    #[test]
    fn test_reserved_shapes_have_no_world_form() {
        let obb = ColliderShape::OrientedBox { size: Vec3::new(1.0, 1.0, 1.0) };
        assert!(obb.to_world_space(Vec3::zeros()).is_none());
    }
    
    #[test]
    fn test_box_vs_sphere_mirrors_sphere_vs_box() {
        let sphere = ColliderShape::sphere(1.0).to_world_space(Vec3::new(0.0, 1.6, 0.0)).unwrap();
        let aabb = ColliderShape::aabb(Vec3::new(2.0, 2.0, 2.0)).to_world_space(Vec3::zeros()).unwrap();
        
        let from_sphere = sphere.contact(&aabb).unwrap();
        let from_box = aabb.contact(&sphere).unwrap();
        
        assert_relative_eq!(from_sphere.normal, Vec3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(from_box.normal, -from_sphere.normal);
        assert_relative_eq!(from_box.penetration_depth, from_sphere.penetration_depth);
        assert_relative_eq!(from_box.point, Vec3::new(0.0, 1.0, 0.0));
    }
}
