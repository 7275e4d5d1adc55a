//! Collider component
//!
//! A collider is one shape attached to one game object, plus the flags that
//! decide how the collision manager treats it and up to three event callbacks.
//! The shape variant is chosen at construction and cannot change afterwards;
//! only its dimensions can be edited.

use std::fmt;

use crate::ecs::{ColliderHandle, Entity, TransformProvider};
use crate::foundation::math::Vec3;
use super::collision::{ColliderShape, ColliderType, WorldSpaceShape};
use super::collision_info::{CollisionEventKind, CollisionInfo};
use super::collision_layers::CollisionLayers;

/// Collision event callback
pub type CollisionCallback = Box<dyn FnMut(&CollisionInfo)>;

/// Collider component
pub struct Collider {
    shape: ColliderShape,
    center: Vec3,
    offset: Vec3,
    is_trigger: bool,
    is_static: bool,
    layer: u32,
    enabled: bool,
    owner: Option<Entity>,
    handle: Option<ColliderHandle>,
    on_enter: Option<CollisionCallback>,
    on_stay: Option<CollisionCallback>,
    on_exit: Option<CollisionCallback>,
}

impl Collider {
    /// Create a new collider with default settings
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            center: Vec3::zeros(),
            offset: Vec3::zeros(),
            is_trigger: false,
            is_static: false,
            layer: CollisionLayers::DEFAULT,
            enabled: true,
            owner: None,
            handle: None,
            on_enter: None,
            on_stay: None,
            on_exit: None,
        }
    }
    
    /// Sphere collider of the given radius
    pub fn sphere(radius: f32) -> Self {
        Self::new(ColliderShape::sphere(radius))
    }
    
    /// Axis-aligned box collider of the given full size
    pub fn aabb(size: Vec3) -> Self {
        Self::new(ColliderShape::aabb(size))
    }
    
    /// Set the local center
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }
    
    /// Set the secondary offset
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }
    
    /// Put the collider on a layer
    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }
    
    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }
    
    /// Mark this as static geometry
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
    
    pub(crate) fn bind(&mut self, owner: Entity, handle: ColliderHandle) {
        self.owner = Some(owner);
        self.handle = Some(handle);
    }
    
    // ===== Properties =====
    
    /// Type tag, fixed at construction
    pub fn collider_type(&self) -> ColliderType {
        self.shape.collider_type()
    }
    
    /// Model-space shape
    pub fn shape(&self) -> &ColliderShape {
        &self.shape
    }
    
    /// Sphere radius, if this is a sphere
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            ColliderShape::Sphere { radius } => Some(radius),
            _ => None,
        }
    }
    
    /// Change the sphere radius; ignored for other shapes
    pub fn set_radius(&mut self, new_radius: f32) {
        if let ColliderShape::Sphere { radius } = &mut self.shape {
            *radius = new_radius.max(0.0);
        } else {
            log::warn!("set_radius ignored on {:?} collider", self.collider_type());
        }
    }
    
    /// Box size, if this is an axis-aligned box
    pub fn size(&self) -> Option<Vec3> {
        match self.shape {
            ColliderShape::Aabb { size } => Some(size),
            _ => None,
        }
    }
    
    /// Change the box size; ignored for other shapes
    pub fn set_size(&mut self, new_size: Vec3) {
        if let ColliderShape::Aabb { size } = &mut self.shape {
            *size = new_size;
        } else {
            log::warn!("set_size ignored on {:?} collider", self.collider_type());
        }
    }
    
    /// Local center
    pub fn center(&self) -> Vec3 {
        self.center
    }
    
    /// Set the local center
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }
    
    /// Secondary offset
    pub fn offset(&self) -> Vec3 {
        self.offset
    }
    
    /// Set the secondary offset
    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }
    
    /// Trigger colliders report overlaps but take no physical response
    pub fn is_trigger(&self) -> bool {
        self.is_trigger
    }
    
    /// Set the trigger flag
    pub fn set_trigger(&mut self, trigger: bool) {
        self.is_trigger = trigger;
    }
    
    /// Static colliders are never tested against each other
    pub fn is_static(&self) -> bool {
        self.is_static
    }
    
    /// Set the static flag
    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }
    
    /// Layer id
    pub fn layer(&self) -> u32 {
        self.layer
    }
    
    /// Set the layer id; range is checked by the layer matrix, not here
    pub fn set_layer(&mut self, layer: u32) {
        self.layer = layer;
    }
    
    /// Whether the component is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
    
    /// Enable or disable the component
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
    
    /// Owning game object
    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }
    
    /// Handle of this collider in its world
    pub fn handle(&self) -> Option<ColliderHandle> {
        self.handle
    }
    
    // ===== World-space geometry =====
    
    /// Owner position + local center + offset
    ///
    /// Zero when the owner is unset or no longer exists.
    pub fn world_center(&self, owners: &impl TransformProvider) -> Vec3 {
        match self.owner.and_then(|owner| owners.world_position(owner)) {
            Some(position) => position + self.center + self.offset,
            None => Vec3::zeros(),
        }
    }
    
    /// World-space minimum corner, for box colliders
    pub fn world_min(&self, owners: &impl TransformProvider) -> Option<Vec3> {
        match self.world_shape(owners)? {
            WorldSpaceShape::Aabb(aabb) => Some(aabb.min()),
            WorldSpaceShape::Sphere(_) => None,
        }
    }
    
    /// World-space maximum corner, for box colliders
    pub fn world_max(&self, owners: &impl TransformProvider) -> Option<Vec3> {
        match self.world_shape(owners)? {
            WorldSpaceShape::Aabb(aabb) => Some(aabb.max()),
            WorldSpaceShape::Sphere(_) => None,
        }
    }
    
    /// The shape placed at the current world center
    pub fn world_shape(&self, owners: &impl TransformProvider) -> Option<WorldSpaceShape> {
        self.shape.to_world_space(self.world_center(owners))
    }
    
    // ===== Narrow phase =====
    
    /// Test this collider against `other`
    ///
    /// Returns `None` if `other` is disabled, or if either shape has no
    /// narrow-phase test yet. On success the record names `other` and its
    /// owner as the counterpart, whichever pair test produced it.
    pub fn check_collision(&self, other: &Collider, owners: &impl TransformProvider) -> Option<CollisionInfo> {
        if !other.enabled {
            return None;
        }
        
        let ours = self.world_shape(owners)?;
        let theirs = other.world_shape(owners)?;
        let contact = ours.contact(&theirs)?;
        
        Some(CollisionInfo::from_contact(contact, other.owner, other.handle))
    }
    
    // ===== Events =====
    
    /// Set the callback fired when a collision starts
    pub fn set_on_collision_enter(&mut self, callback: impl FnMut(&CollisionInfo) + 'static) {
        self.on_enter = Some(Box::new(callback));
    }
    
    /// Set the callback fired every frame a collision continues
    pub fn set_on_collision_stay(&mut self, callback: impl FnMut(&CollisionInfo) + 'static) {
        self.on_stay = Some(Box::new(callback));
    }
    
    /// Set the callback fired when a collision ends
    pub fn set_on_collision_exit(&mut self, callback: impl FnMut(&CollisionInfo) + 'static) {
        self.on_exit = Some(Box::new(callback));
    }
    
    /// Remove all callbacks
    pub fn clear_callbacks(&mut self) {
        self.on_enter = None;
        self.on_stay = None;
        self.on_exit = None;
    }
    
    /// Fire the enter callback, if any
    pub fn on_collision_enter(&mut self, info: &CollisionInfo) {
        if let Some(callback) = self.on_enter.as_mut() {
            callback(info);
        }
    }
    
    /// Fire the stay callback, if any
    pub fn on_collision_stay(&mut self, info: &CollisionInfo) {
        if let Some(callback) = self.on_stay.as_mut() {
            callback(info);
        }
    }
    
    /// Fire the exit callback, if any
    pub fn on_collision_exit(&mut self, info: &CollisionInfo) {
        if let Some(callback) = self.on_exit.as_mut() {
            callback(info);
        }
    }
    
    pub(crate) fn notify(&mut self, kind: CollisionEventKind, info: &CollisionInfo) {
        match kind {
            CollisionEventKind::Enter => self.on_collision_enter(info),
            CollisionEventKind::Stay => self.on_collision_stay(info),
            CollisionEventKind::Exit => self.on_collision_exit(info),
        }
    }
}

impl fmt::Debug for Collider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collider")
            .field("shape", &self.shape)
            .field("center", &self.center)
            .field("offset", &self.offset)
            .field("is_trigger", &self.is_trigger)
            .field("is_static", &self.is_static)
            .field("layer", &self.layer)
            .field("enabled", &self.enabled)
            .field("owner", &self.owner)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
