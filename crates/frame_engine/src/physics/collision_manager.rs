//! Per-frame collision detection and event dispatch
//!
//! The manager holds handles to registered colliders, never the colliders
//! themselves; storage belongs to the [`World`]. Every frame it tests each
//! registered pair once, classifies the result against the previous frame and
//! notifies both colliders of every pair.

use std::collections::HashSet;

use crate::core::PhysicsConfig;
use crate::debug::CollisionDebugVisualizer;
use crate::ecs::{ColliderHandle, Entity, TransformProvider, World};
use crate::foundation::math::Vec3;
use super::collider::Collider;
use super::collision_info::{CollisionEvent, CollisionEventKind, CollisionInfo, CollisionPair};
use super::collision_layers::LayerCollisionMatrix;
use super::error::PhysicsError;

/// Collision manager
///
/// Construct one per world and call [`update`](Self::update) once per frame,
/// after game logic has moved objects for that frame.
#[derive(Debug)]
pub struct CollisionManager {
    /// Registered colliders, unique
    colliders: Vec<ColliderHandle>,
    
    /// Pairs that were colliding at the end of the last update
    previous_collisions: HashSet<CollisionPair>,
    
    layer_matrix: LayerCollisionMatrix,
    gravity: Vec3,
    debug_draw: bool,
    
    /// Classifications dispatched by the last update
    frame_events: Vec<CollisionEvent>,
}

impl CollisionManager {
    /// Create a manager with default gravity and every layer pair enabled
    pub fn new() -> Self {
        Self::with_config(&PhysicsConfig::default())
    }
    
    /// Create a manager from configuration
    ///
    /// Invalid entries in `disabled_layer_pairs` are reported and skipped.
    pub fn with_config(config: &PhysicsConfig) -> Self {
        let mut manager = Self {
            colliders: Vec::new(),
            previous_collisions: HashSet::new(),
            layer_matrix: LayerCollisionMatrix::new(),
            gravity: config.gravity,
            debug_draw: config.debug_draw,
            frame_events: Vec::new(),
        };
        
        for &(layer1, layer2) in &config.disabled_layer_pairs {
            if let Err(err) = manager.set_layer_collision(layer1, layer2, false) {
                log::warn!("Skipping disabled layer pair from config: {err}");
            }
        }
        
        log::info!(
            "Collision manager initialized (gravity: {:?}, disabled layer pairs: {})",
            manager.gravity,
            config.disabled_layer_pairs.len()
        );
        manager
    }
    
    /// Drop every registration and all frame state
    pub fn shutdown(&mut self) {
        self.colliders.clear();
        self.previous_collisions.clear();
        self.frame_events.clear();
        log::info!("Collision manager shut down");
    }
    
    // ===== Registration =====
    
    /// Add a collider to the registry; registering twice is a no-op
    pub fn register_collider(&mut self, handle: ColliderHandle) {
        if self.colliders.contains(&handle) {
            return;
        }
        self.colliders.push(handle);
        log::debug!("Registered collider {} ({} total)", handle.id(), self.colliders.len());
    }
    
    /// Remove a collider from the registry; absent handles are ignored
    ///
    /// Pairs it was part of last frame still receive an exit next update, on
    /// whichever side still exists.
    pub fn unregister_collider(&mut self, handle: ColliderHandle) {
        let before = self.colliders.len();
        self.colliders.retain(|&h| h != handle);
        if self.colliders.len() != before {
            log::debug!("Unregistered collider {} ({} total)", handle.id(), self.colliders.len());
        }
    }
    
    /// Whether `handle` is in the registry
    pub fn is_registered(&self, handle: ColliderHandle) -> bool {
        self.colliders.contains(&handle)
    }
    
    /// Number of registered colliders
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
    
    /// Store `collider` on `owner` and register it
    pub fn attach(
        &mut self,
        world: &mut World,
        owner: Entity,
        collider: Collider,
    ) -> Result<ColliderHandle, PhysicsError> {
        let handle = world
            .insert_collider(owner, collider)
            .ok_or(PhysicsError::UnknownEntity(owner))?;
        self.register_collider(handle);
        Ok(handle)
    }
    
    /// Unregister a collider and remove it from its owner
    pub fn detach(&mut self, world: &mut World, handle: ColliderHandle) -> Option<Collider> {
        self.unregister_collider(handle);
        world.remove_collider(handle)
    }
    
    /// Unregister every collider of `entity`, then destroy it
    pub fn despawn(&mut self, world: &mut World, entity: Entity) -> bool {
        if let Some(object) = world.get(entity) {
            for &handle in object.colliders() {
                self.unregister_collider(handle);
            }
        }
        world.destroy(entity).is_some()
    }
    
    // ===== Frame update =====
    
    /// Run one detection pass and dispatch enter, stay and exit events
    pub fn update(&mut self, world: &mut World) {
        self.frame_events.clear();
        self.remove_dead_colliders(world);
        
        let mut current = HashSet::with_capacity(self.previous_collisions.len());
        
        for i in 0..self.colliders.len() {
            for j in (i + 1)..self.colliders.len() {
                let (first, second) = (self.colliders[i], self.colliders[j]);
                let Some(info) = self.test_pair(world, first, second) else {
                    continue;
                };
                
                let pair = CollisionPair::new(first, second);
                current.insert(pair);
                
                let kind = if self.previous_collisions.contains(&pair) {
                    CollisionEventKind::Stay
                } else {
                    CollisionEventKind::Enter
                };
                self.dispatch(world, kind, pair, &info);
            }
        }
        
        let exited: Vec<CollisionPair> = self
            .previous_collisions
            .difference(&current)
            .copied()
            .collect();
        for pair in exited {
            self.dispatch(world, CollisionEventKind::Exit, pair, &CollisionInfo::default());
        }
        
        self.previous_collisions = current;
        
        log::trace!(
            "Collision update: {} colliders, {} active pairs, {} events",
            self.colliders.len(),
            self.previous_collisions.len(),
            self.frame_events.len()
        );
    }
    
    /// Drop registrations whose collider or owner no longer exists
    fn remove_dead_colliders(&mut self, world: &World) {
        self.colliders.retain(|&handle| {
            world
                .collider(handle)
                .and_then(Collider::owner)
                .is_some_and(|owner| world.contains(owner))
        });
    }
    
    /// Filter a pair, then run the narrow phase
    fn test_pair(&self, world: &World, first: ColliderHandle, second: ColliderHandle) -> Option<CollisionInfo> {
        let a = world.collider(first)?;
        let b = world.collider(second)?;
        
        if !a.is_enabled() || !b.is_enabled() {
            return None;
        }
        if !world.is_active(a.owner()?) || !world.is_active(b.owner()?) {
            return None;
        }
        if a.is_static() && b.is_static() {
            return None;
        }
        if !self.layer_matrix.get(a.layer(), b.layer()) {
            return None;
        }
        
        a.check_collision(b, world)
    }
    
    /// Notify `first` then `second`, each addressed to its counterpart
    fn dispatch(&mut self, world: &mut World, kind: CollisionEventKind, pair: CollisionPair, info: &CollisionInfo) {
        let owner_of = |handle: ColliderHandle| world.collider(handle).and_then(Collider::owner);
        let first_info = info.with_other(owner_of(pair.second()), Some(pair.second()));
        let second_info = info.with_other(owner_of(pair.first()), Some(pair.first()));
        
        if let Some(collider) = world.collider_mut(pair.first()) {
            collider.notify(kind, &first_info);
        }
        if let Some(collider) = world.collider_mut(pair.second()) {
            collider.notify(kind, &second_info);
        }
        
        self.frame_events.push(CollisionEvent {
            kind,
            pair,
            info: first_info,
        });
    }
    
    /// Events dispatched by the last update, in dispatch order
    pub fn frame_events(&self) -> &[CollisionEvent] {
        &self.frame_events
    }
    
    /// Pairs colliding as of the last update
    pub fn active_pairs(&self) -> impl Iterator<Item = &CollisionPair> + '_ {
        self.previous_collisions.iter()
    }
    
    /// Whether `handle` was part of any colliding pair in the last update
    pub fn is_colliding(&self, handle: ColliderHandle) -> bool {
        self.previous_collisions.iter().any(|pair| pair.contains(handle))
    }
    
    // ===== Layers =====
    
    /// Allow or forbid collisions between two layers, symmetrically
    pub fn set_layer_collision(&mut self, layer1: u32, layer2: u32, enable: bool) -> Result<(), PhysicsError> {
        self.layer_matrix.set(layer1, layer2, enable).map_err(|err| {
            log::error!("{err}");
            err
        })
    }
    
    /// Whether two layers may collide; `false` for out-of-range layers
    pub fn layer_collision(&self, layer1: u32, layer2: u32) -> bool {
        self.layer_matrix.get(layer1, layer2)
    }
    
    /// Re-enable every layer pair
    pub fn reset_layer_collisions(&mut self) {
        self.layer_matrix.reset();
    }
    
    // ===== Global settings =====
    
    /// Gravity for rigid body integration
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }
    
    /// Set gravity
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }
    
    /// Whether [`draw_debug`](Self::draw_debug) produces shapes
    pub fn debug_draw(&self) -> bool {
        self.debug_draw
    }
    
    /// Toggle debug drawing
    pub fn set_debug_draw(&mut self, enabled: bool) {
        self.debug_draw = enabled;
    }
    
    /// Draw every registered collider and the contacts of the last update
    pub fn draw_debug(&self, world: &World, visualizer: &mut CollisionDebugVisualizer) {
        if !self.debug_draw {
            return;
        }
        
        for collider in self.colliders.iter().filter_map(|&handle| world.collider(handle)) {
            visualizer.draw_collider(collider, world);
        }
        
        for event in &self.frame_events {
            if event.kind != CollisionEventKind::Exit {
                visualizer.draw_contact(&event.info);
            }
        }
    }
}

impl Default for CollisionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Transform;
    use crate::physics::collision_layers::CollisionLayers;
    use approx::assert_relative_eq;
    
    fn attach_at(manager: &mut CollisionManager, world: &mut World, position: Vec3, collider: Collider) -> ColliderHandle {
        let entity = world.spawn("body", Transform::from_position(position));
        manager.attach(world, entity, collider).unwrap()
    }
    
    #[test]
    fn test_registration_is_idempotent() {
        let mut world = World::new();
        let mut manager = CollisionManager::new();
        let handle = attach_at(&mut manager, &mut world, Vec3::zeros(), Collider::sphere(1.0));
        
        manager.register_collider(handle);
        assert_eq!(manager.collider_count(), 1);
        
        manager.unregister_collider(handle);
        manager.unregister_collider(handle);
        assert_eq!(manager.collider_count(), 0);
        assert!(!manager.is_registered(handle));
    }
    
    #[test]
    fn test_attach_to_missing_owner() {
        let mut world = World::new();
        let mut manager = CollisionManager::new();
        let entity = world.spawn("gone", Transform::identity());
        world.destroy(entity);
        
        let result = manager.attach(&mut world, entity, Collider::sphere(1.0));
        assert_eq!(result, Err(PhysicsError::UnknownEntity(entity)));
        assert_eq!(manager.collider_count(), 0);
    }
    
    #[test]
    fn test_invalid_layer_rejected_without_mutation() {
        let mut manager = CollisionManager::new();
        
        assert_eq!(
            manager.set_layer_collision(32, 1, false),
            Err(PhysicsError::InvalidLayer { layer1: 32, layer2: 1 })
        );
        assert!(manager.layer_collision(1, 1));
        assert!(!manager.layer_collision(1, 32));
    }
    
    #[test]
    fn test_layer_collision_symmetric() {
        let mut manager = CollisionManager::new();
        manager
            .set_layer_collision(CollisionLayers::PLAYER, CollisionLayers::PICKUP, false)
            .unwrap();
        
        assert!(!manager.layer_collision(CollisionLayers::PICKUP, CollisionLayers::PLAYER));
        
        manager.reset_layer_collisions();
        assert!(manager.layer_collision(CollisionLayers::PICKUP, CollisionLayers::PLAYER));
    }
    
    #[test]
    fn test_with_config() {
        let config = PhysicsConfig {
            gravity: Vec3::new(0.0, -1.6, 0.0),
            disabled_layer_pairs: vec![(1, 2), (40, 1), (3, 3)],
            debug_draw: true,
        };
        let manager = CollisionManager::with_config(&config);
        
        assert_relative_eq!(manager.gravity(), Vec3::new(0.0, -1.6, 0.0));
        assert!(manager.debug_draw());
        assert!(!manager.layer_collision(2, 1));
        assert!(!manager.layer_collision(3, 3));
        assert!(manager.layer_collision(1, 1));
    }
    
    #[test]
    fn test_update_records_events() {
        let mut world = World::new();
        let mut manager = CollisionManager::new();
        let a = attach_at(&mut manager, &mut world, Vec3::zeros(), Collider::sphere(1.0));
        let b = attach_at(&mut manager, &mut world, Vec3::new(1.5, 0.0, 0.0), Collider::sphere(1.0));
        
        manager.update(&mut world);
        
        let events = manager.frame_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, CollisionEventKind::Enter);
        assert_eq!(events[0].pair, CollisionPair::new(b, a));
        assert_eq!(events[0].info.other_collider, Some(b));
        assert_relative_eq!(events[0].info.penetration_depth, 0.5);
        assert!(manager.is_colliding(a));
        assert_eq!(manager.active_pairs().count(), 1);
        
        manager.update(&mut world);
        assert_eq!(manager.frame_events()[0].kind, CollisionEventKind::Stay);
    }
    
    #[test]
    fn test_detach_fires_exit_on_survivor() {
        let mut world = World::new();
        let mut manager = CollisionManager::new();
        let a = attach_at(&mut manager, &mut world, Vec3::zeros(), Collider::sphere(1.0));
        let b = attach_at(&mut manager, &mut world, Vec3::zeros(), Collider::sphere(1.0));
        
        manager.update(&mut world);
        assert!(manager.detach(&mut world, b).is_some());
        manager.update(&mut world);
        
        let events = manager.frame_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, CollisionEventKind::Exit);
        assert!(events[0].pair.contains(a));
        assert!(!manager.is_colliding(a));
    }
    
    #[test]
    fn test_shutdown_clears_state() {
        let mut world = World::new();
        let mut manager = CollisionManager::new();
        attach_at(&mut manager, &mut world, Vec3::zeros(), Collider::sphere(1.0));
        attach_at(&mut manager, &mut world, Vec3::zeros(), Collider::sphere(1.0));
        manager.update(&mut world);
        
        manager.shutdown();
        assert_eq!(manager.collider_count(), 0);
        assert_eq!(manager.active_pairs().count(), 0);
        assert!(manager.frame_events().is_empty());
    }
    
    #[test]
    fn test_draw_debug_respects_flag() {
        let mut world = World::new();
        let mut manager = CollisionManager::new();
        attach_at(&mut manager, &mut world, Vec3::zeros(), Collider::sphere(1.0));
        attach_at(&mut manager, &mut world, Vec3::new(0.5, 0.0, 0.0), Collider::aabb(Vec3::new(1.0, 1.0, 1.0)).as_trigger());
        manager.update(&mut world);
        
        let mut visualizer = CollisionDebugVisualizer::new();
        manager.draw_debug(&world, &mut visualizer);
        assert!(visualizer.shapes().is_empty());
        
        manager.set_debug_draw(true);
        manager.draw_debug(&world, &mut visualizer);
        // two colliders plus point and normal for the one contact
        assert_eq!(visualizer.shapes().len(), 4);
    }
}
