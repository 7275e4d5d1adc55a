//! Primitive collision shapes and intersection algorithms
//!
//! World-space spheres and axis-aligned boxes with the pairwise narrow-phase
//! tests that produce a [`Contact`]. Every test is written from the point of
//! view of `self`: the returned normal points from `self` toward `other`
//! (except where a degenerate fallback says otherwise).

use crate::foundation::math::{utils, Vec3};

/// Distance below which two points are treated as coincident
pub const COLLISION_EPSILON: f32 = 0.0001;

/// Geometric result of a successful narrow-phase test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point in world space
    pub point: Vec3,
    /// Unit contact normal
    pub normal: Vec3,
    /// Overlap along the normal (non-negative)
    pub penetration_depth: f32,
}

impl Contact {
    /// Same contact seen from the other participant
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    ///
    /// Exact tangency is not an intersection.
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let radius_sum = self.radius + other.radius;
        (other.center - self.center).magnitude_squared() < radius_sum * radius_sum
    }

    /// Sphere vs sphere contact
    ///
    /// Coincident centers fall back to a +Y normal with the contact at our center.
    pub fn contact_sphere(&self, other: &BoundingSphere) -> Option<Contact> {
        if !self.intersects(other) {
            return None;
        }
        
        let delta = other.center - self.center;
        let distance = delta.magnitude();
        let penetration_depth = self.radius + other.radius - distance;
        
        if distance < COLLISION_EPSILON {
            return Some(Contact {
                point: self.center,
                normal: Vec3::y(),
                penetration_depth,
            });
        }
        
        let normal = delta / distance;
        Some(Contact {
            point: self.center + normal * self.radius,
            normal,
            penetration_depth,
        })
    }

    /// Sphere vs box contact
    ///
    /// The contact point is the point of the box closest to our center. When
    /// the center lies inside the box that point is the center itself, so the
    /// normal is taken instead along the axis on which the center sits closest
    /// to the box center, pointing away from the box center.
    pub fn contact_aabb(&self, aabb: &Aabb) -> Option<Contact> {
        let closest = aabb.closest_point(self.center);
        let delta = closest - self.center;
        let distance_squared = delta.magnitude_squared();
        
        if distance_squared >= self.radius * self.radius {
            return None;
        }
        
        let distance = distance_squared.sqrt();
        let normal = if distance < COLLISION_EPSILON {
            let to_center = self.center - aabb.center;
            let (dx, dy, dz) = (to_center.x.abs(), to_center.y.abs(), to_center.z.abs());
            
            // strict comparisons: equal distances fall through toward Z
            let axis = if dx < dy && dx < dz {
                0
            } else if dy < dz {
                1
            } else {
                2
            };
            utils::signed_axis(axis, to_center[axis])
        } else {
            delta / distance
        };
        
        Some(Contact {
            point: closest,
            normal,
            penetration_depth: self.radius - distance,
        })
    }
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center in world space
    pub center: Vec3,
    /// Half of the size on each axis
    pub half_extents: Vec3,
}

impl Aabb {
    /// Creates a box from its center and full size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Point inside (or on) the box closest to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        utils::clamp_to_box(point, self.min(), self.max())
    }

    /// Check if this box overlaps another (touching faces count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (other.min(), other.max());
        (0..3).all(|axis| min1[axis] <= max2[axis] && max1[axis] >= min2[axis])
    }

    /// Box vs box contact
    ///
    /// The normal follows the axis of least penetration, first axis in X, Y, Z
    /// order on exact ties, signed by the direction from our center to theirs.
    /// The contact point sits on our face toward `other`, at the middle of the
    /// overlap region on the two remaining axes.
    ///
    /// Boxes sharing a center on the winning axis both get the negative axis,
    /// so swapping the boxes does not flip the normal in that case.
    pub fn contact_aabb(&self, other: &Aabb) -> Option<Contact> {
        if !self.intersects(other) {
            return None;
        }
        
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (other.min(), other.max());
        let overlap = Vec3::from_fn(|axis, _| (max1[axis] - min2[axis]).min(max2[axis] - min1[axis]));
        
        let mut axis = 0;
        for candidate in 1..3 {
            if overlap[candidate] < overlap[axis] {
                axis = candidate;
            }
        }
        
        let direction = other.center - self.center;
        let normal = utils::signed_axis(axis, direction[axis]);
        
        let mut point = Vec3::from_fn(|k, _| (min1[k].max(min2[k]) + max1[k].min(max2[k])) * 0.5);
        point[axis] = if direction[axis] > 0.0 { max1[axis] } else { min1[axis] };
        
        Some(Contact {
            point,
            normal,
            penetration_depth: overlap[axis],
        })
    }
}
