//! Entity implementation

slotmap::new_key_type! {
    /// Entity identifier (generational handle into [`World`](super::World))
    pub struct Entity;

    /// Collider identifier (generational handle into the world's collider store)
    pub struct ColliderHandle;
}

impl Entity {
    /// Get the packed entity ID (index and generation)
    pub fn id(&self) -> u64 {
        slotmap::Key::data(self).as_ffi()
    }
}

impl ColliderHandle {
    /// Get the packed collider ID (index and generation)
    pub fn id(&self) -> u64 {
        slotmap::Key::data(self).as_ffi()
    }
}
