//! Collision detection, collision events and rigid body integration
//!
//! Detection is brute-force pairwise over every registered collider. There is
//! no broad phase and no collision response; contacts are reported through
//! collider callbacks and the manager's per-frame event list.

pub mod collider;
pub mod collision;
pub mod collision_info;
pub mod collision_layers;
pub mod collision_manager;
pub mod error;
pub mod rigid_body;

pub use collider::{Collider, CollisionCallback};
pub use collision::{Aabb, BoundingSphere, ColliderShape, ColliderType, Contact, WorldSpaceShape};
pub use collision_info::{CollisionEvent, CollisionEventKind, CollisionInfo, CollisionPair};
pub use collision_layers::{CollisionLayers, LayerCollisionMatrix, MAX_LAYERS};
pub use collision_manager::CollisionManager;
pub use error::PhysicsError;
pub use rigid_body::RigidBody;
