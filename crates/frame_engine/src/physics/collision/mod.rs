//! Collision geometry
//!
//! # Architecture
//!
//! - **Model Space Storage**: collider shapes keep only their sizes
//! - **On-Demand Transformation**: shapes are placed in world space only during tests
//!
//! # Module Organization
//!
//! - [`primitives`] - World-space spheres and boxes with the pairwise contact tests
//! - [`shape`] - Model-space [`ColliderShape`] and its type tag

pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Aabb, BoundingSphere, Contact, COLLISION_EPSILON};
pub use shape::{ColliderShape, ColliderType, WorldSpaceShape};
