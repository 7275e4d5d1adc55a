//! Debug visualization
//!
//! A shape queue plus a collider-aware front end over it.

pub mod draw;
pub mod collision_debug;

pub use draw::{DebugShape, DebugDrawSystem};
pub use collision_debug::{CollisionDebugColors, CollisionDebugVisualizer};
