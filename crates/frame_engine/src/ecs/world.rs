//! ECS World implementation

use slotmap::SlotMap;

use super::{Entity, ColliderHandle};
use crate::foundation::math::{Transform, Vec3};
use crate::physics::collider::Collider;
use crate::physics::rigid_body::RigidBody;

/// Read access to owner state needed by colliders
///
/// Colliders never cache their owner's position; every test pulls it through
/// this trait so the result always reflects the live transform.
pub trait TransformProvider {
    /// World position of `entity`, or `None` if the entity no longer exists
    fn world_position(&self, entity: Entity) -> Option<Vec3>;
    
    /// Whether `entity` exists and is active
    fn is_active(&self, entity: Entity) -> bool;
}

/// A game object: transform, active flag and the components it owns
#[derive(Debug)]
pub struct GameObject {
    /// Display name
    pub name: String,
    /// World transform
    pub transform: Transform,
    /// Inactive objects are skipped by physics
    pub active: bool,
    /// Optional rigid body driven by [`World::integrate_rigid_bodies`]
    pub rigid_body: Option<RigidBody>,
    colliders: Vec<ColliderHandle>,
}

impl GameObject {
    /// Colliders owned by this object
    pub fn colliders(&self) -> &[ColliderHandle] {
        &self.colliders
    }
}

/// ECS World containing all game objects and their colliders
///
/// The world is the sole owner of collider storage. Destroying an object
/// destroys its colliders with it.
#[derive(Default)]
pub struct World {
    objects: SlotMap<Entity, GameObject>,
    colliders: SlotMap<ColliderHandle, Collider>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Create a new active game object
    pub fn spawn(&mut self, name: impl Into<String>, transform: Transform) -> Entity {
        self.objects.insert(GameObject {
            name: name.into(),
            transform,
            active: true,
            rigid_body: None,
            colliders: Vec::new(),
        })
    }
    
    /// Destroy a game object and every collider it owns
    ///
    /// Colliders are not unregistered from any collision manager here; use
    /// `CollisionManager::despawn` for the full teardown. A manager that still
    /// holds the stale handles drops them on its next update.
    pub fn destroy(&mut self, entity: Entity) -> Option<GameObject> {
        let object = self.objects.remove(entity)?;
        for &handle in &object.colliders {
            self.colliders.remove(handle);
        }
        Some(object)
    }
    
    /// Check whether `entity` is still alive
    pub fn contains(&self, entity: Entity) -> bool {
        self.objects.contains_key(entity)
    }
    
    /// Get a game object
    pub fn get(&self, entity: Entity) -> Option<&GameObject> {
        self.objects.get(entity)
    }
    
    /// Get a mutable game object
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut GameObject> {
        self.objects.get_mut(entity)
    }
    
    /// Set an object's position; returns `false` if the entity is gone
    pub fn set_position(&mut self, entity: Entity, position: Vec3) -> bool {
        self.objects
            .get_mut(entity)
            .map(|object| object.transform.position = position)
            .is_some()
    }
    
    /// Activate or deactivate an object; returns `false` if the entity is gone
    pub fn set_active(&mut self, entity: Entity, active: bool) -> bool {
        self.objects
            .get_mut(entity)
            .map(|object| object.active = active)
            .is_some()
    }
    
    /// Attach a rigid body to an object, replacing any previous one
    pub fn add_rigid_body(&mut self, entity: Entity, rigid_body: RigidBody) -> bool {
        self.objects
            .get_mut(entity)
            .map(|object| object.rigid_body = Some(rigid_body))
            .is_some()
    }
    
    /// Get an object's rigid body
    pub fn rigid_body_mut(&mut self, entity: Entity) -> Option<&mut RigidBody> {
        self.objects.get_mut(entity)?.rigid_body.as_mut()
    }
    
    /// Store a collider as a component of `owner`
    ///
    /// Binds the collider to its owner and to its own handle. Returns `None`
    /// (dropping the collider) if the owner does not exist.
    pub fn insert_collider(&mut self, owner: Entity, mut collider: Collider) -> Option<ColliderHandle> {
        let object = self.objects.get_mut(owner)?;
        let handle = self.colliders.insert_with_key(|handle| {
            collider.bind(owner, handle);
            collider
        });
        object.colliders.push(handle);
        Some(handle)
    }
    
    /// Remove a collider from the store and from its owner's component list
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Option<Collider> {
        let collider = self.colliders.remove(handle)?;
        if let Some(object) = collider.owner().and_then(|owner| self.objects.get_mut(owner)) {
            object.colliders.retain(|&h| h != handle);
        }
        Some(collider)
    }
    
    /// Get a collider
    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle)
    }
    
    /// Get a mutable collider
    pub fn collider_mut(&mut self, handle: ColliderHandle) -> Option<&mut Collider> {
        self.colliders.get_mut(handle)
    }
    
    /// Step every active object's rigid body by `delta_time`
    pub fn integrate_rigid_bodies(&mut self, gravity: Vec3, delta_time: f32) {
        for object in self.objects.values_mut().filter(|object| object.active) {
            if let Some(rigid_body) = object.rigid_body.as_mut() {
                rigid_body.integrate(&mut object.transform, gravity, delta_time);
            }
        }
    }
    
    /// Iterate over all live entities
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.objects.keys()
    }
    
    /// Number of live game objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
    
    /// Number of live colliders
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

impl TransformProvider for World {
    fn world_position(&self, entity: Entity) -> Option<Vec3> {
        self.objects.get(entity).map(|object| object.transform.position)
    }
    
    fn is_active(&self, entity: Entity) -> bool {
        self.objects.get(entity).is_some_and(|object| object.active)
    }
}
