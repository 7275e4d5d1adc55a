//! Entity-Component container
//!
//! Game objects own their transform, an active flag, an optional rigid body
//! and any number of colliders. Everything outside the container refers to
//! them through generational handles, so a destroyed object or collider turns
//! every outstanding handle into a failed lookup instead of a dangling reference.

pub mod world;
pub mod entity;

pub use world::{World, GameObject, TransformProvider};
pub use entity::{Entity, ColliderHandle};
