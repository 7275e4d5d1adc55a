//! Contact records, collider pairs and frame events

use std::hash::{Hash, Hasher};

use crate::ecs::{ColliderHandle, Entity};
use crate::foundation::math::Vec3;
use super::collision::Contact;

/// Contact information handed to collision callbacks
///
/// Built fresh for every test and every callback; nothing here outlives the
/// frame. `other`/`other_collider` are weak handles: they may fail to resolve
/// if the counterpart was destroyed, which is expected during teardown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Owner of the other collider
    pub other: Option<Entity>,
    /// The other collider
    pub other_collider: Option<ColliderHandle>,
    /// Contact point in world space
    pub contact_point: Vec3,
    /// Unit normal pointing from the tested collider toward the other one
    pub contact_normal: Vec3,
    /// Overlap depth along the normal
    pub penetration_depth: f32,
    /// Reserved: relative velocity at contact
    pub relative_velocity: Vec3,
    /// Reserved: time of contact
    pub timestamp: f32,
}

impl Default for CollisionInfo {
    fn default() -> Self {
        Self {
            other: None,
            other_collider: None,
            contact_point: Vec3::zeros(),
            contact_normal: Vec3::zeros(),
            penetration_depth: 0.0,
            relative_velocity: Vec3::zeros(),
            timestamp: 0.0,
        }
    }
}

impl CollisionInfo {
    /// Build a record from a narrow-phase contact against `other_collider`
    pub fn from_contact(
        contact: Contact,
        other: Option<Entity>,
        other_collider: Option<ColliderHandle>,
    ) -> Self {
        Self {
            other,
            other_collider,
            contact_point: contact.point,
            contact_normal: contact.normal,
            penetration_depth: contact.penetration_depth,
            ..Self::default()
        }
    }
    
    /// Same record re-addressed to a different counterpart
    pub fn with_other(self, other: Option<Entity>, other_collider: Option<ColliderHandle>) -> Self {
        Self {
            other,
            other_collider,
            ..self
        }
    }
}

/// Unordered pair of colliders
///
/// `CollisionPair::new(a, b) == CollisionPair::new(b, a)` and both hash the
/// same. The construction order is kept for event dispatch: `first` is
/// always notified before `second`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct CollisionPair {
    first: ColliderHandle,
    second: ColliderHandle,
}

impl CollisionPair {
    /// Create a new collision pair
    pub fn new(first: ColliderHandle, second: ColliderHandle) -> Self {
        Self { first, second }
    }
    
    /// Collider notified first
    pub fn first(&self) -> ColliderHandle {
        self.first
    }
    
    /// Collider notified second
    pub fn second(&self) -> ColliderHandle {
        self.second
    }
    
    /// Check if `handle` is part of this pair
    pub fn contains(&self, handle: ColliderHandle) -> bool {
        self.first == handle || self.second == handle
    }
    
    /// The member that is not `handle`, if `handle` is a member
    pub fn other(&self, handle: ColliderHandle) -> Option<ColliderHandle> {
        if self.first == handle {
            Some(self.second)
        } else if self.second == handle {
            Some(self.first)
        } else {
            None
        }
    }
    
    fn ordered(&self) -> (ColliderHandle, ColliderHandle) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for CollisionPair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for CollisionPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

/// Classification of a colliding pair in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionEventKind {
    /// Pair started colliding this frame
    Enter,
    /// Pair was already colliding last frame
    Stay,
    /// Pair stopped colliding this frame
    Exit,
}

/// One dispatched classification, recorded for the entity layer to drain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Enter, Stay or Exit
    pub kind: CollisionEventKind,
    /// The pair, in dispatch order
    pub pair: CollisionPair,
    /// Contact seen from `pair.first()`; empty for exits
    pub info: CollisionInfo,
}
