//! Physics error types

use crate::ecs::Entity;

/// Errors reported by physics configuration and lifecycle calls
///
/// Frame updates never produce these; they only come back from explicit
/// setup calls, which leave state untouched when they fail.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// A layer id outside `0..MAX_LAYERS`
    #[error("invalid layer index: {layer1}, {layer2}")]
    InvalidLayer {
        /// First layer argument
        layer1: u32,
        /// Second layer argument
        layer2: u32,
    },
    
    /// The owning entity does not exist
    #[error("entity {0:?} does not exist")]
    UnknownEntity(Entity),
}
