//! # Frame Engine
//!
//! Core of a component-based game framework: game objects with transforms,
//! pairwise collision detection with enter/stay/exit events, layer filtering
//! and a simple rigid body integrator.
//!
//! ## Quick Start
//!
//! ```rust
//! use frame_engine::prelude::*;
//!
//! let mut world = World::new();
//! let mut physics = CollisionManager::new();
//!
//! let floor = world.spawn("floor", Transform::identity());
//! physics
//!     .attach(&mut world, floor, Collider::aabb(Vec3::new(10.0, 1.0, 10.0)).as_static())
//!     .unwrap();
//!
//! let ball = world.spawn("ball", Transform::from_position(Vec3::new(0.0, 0.9, 0.0)));
//! let mut collider = Collider::sphere(0.5);
//! collider.set_on_collision_enter(|info| assert!(info.penetration_depth > 0.0));
//! physics.attach(&mut world, ball, collider).unwrap();
//!
//! physics.update(&mut world);
//! assert_eq!(physics.frame_events().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod core;
pub mod ecs;
pub mod physics;
pub mod debug;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::core::{ApplicationConfig, PhysicsConfig, TimeConfig};
    pub use crate::debug::{CollisionDebugVisualizer, DebugDrawSystem, DebugShape};
    pub use crate::ecs::{ColliderHandle, Entity, GameObject, TransformProvider, World};
    pub use crate::foundation::math::{Quat, Transform, Vec3, Vec4};
    pub use crate::foundation::time::{Stopwatch, Timer};
    pub use crate::physics::{
        Collider, ColliderShape, ColliderType, CollisionEvent, CollisionEventKind, CollisionInfo,
        CollisionLayers, CollisionManager, CollisionPair, PhysicsError, RigidBody,
    };
}
