//! Collision layer system for filtering collision detection
//! 
//! Based on Game Engine Architecture 3rd Edition, Section 13.3.8:
//! "Most games need to filter collisions... This is typically done via 
//! collision layers or groups."
//!
//! Each collider sits on exactly one layer id in `0..MAX_LAYERS`. Whether two
//! layers interact is decided by a symmetric 32×32 matrix, stored as one
//! 32-bit row mask per layer.

use super::error::PhysicsError;

/// Number of collision layers
pub const MAX_LAYERS: u32 = 32;

/// Well-known layer ids
pub struct CollisionLayers;

impl CollisionLayers {
    /// Default layer for colliders that never set one
    pub const DEFAULT: u32 = 0;
    
    /// Player character layer
    pub const PLAYER: u32 = 1;
    
    /// Enemy character layer
    pub const ENEMY: u32 = 2;
    
    /// Projectiles (bullets, missiles, etc.)
    pub const PROJECTILE: u32 = 3;
    
    /// Static environment geometry
    pub const ENVIRONMENT: u32 = 4;
    
    /// Trigger volumes (no physical response)
    pub const TRIGGER: u32 = 5;
    
    /// Debris and small physics objects
    pub const DEBRIS: u32 = 6;
    
    /// Pickups and collectibles
    pub const PICKUP: u32 = 7;
    
    /// Check if a layer id is inside the matrix
    pub fn is_valid(layer: u32) -> bool {
        layer < MAX_LAYERS
    }
}

/// Symmetric layer-vs-layer collision table, all pairs enabled by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerCollisionMatrix {
    rows: [u32; MAX_LAYERS as usize],
}

impl Default for LayerCollisionMatrix {
    fn default() -> Self {
        Self {
            rows: [u32::MAX; MAX_LAYERS as usize],
        }
    }
}

impl LayerCollisionMatrix {
    /// Create a matrix with every layer pair enabled
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Enable or disable collision between two layers (both directions)
    ///
    /// Out-of-range ids leave the matrix untouched and return an error.
    pub fn set(&mut self, layer1: u32, layer2: u32, enable: bool) -> Result<(), PhysicsError> {
        if !CollisionLayers::is_valid(layer1) || !CollisionLayers::is_valid(layer2) {
            return Err(PhysicsError::InvalidLayer { layer1, layer2 });
        }
        
        self.write(layer1, layer2, enable);
        self.write(layer2, layer1, enable);
        Ok(())
    }
    
    /// Check whether two layers collide; out-of-range ids never collide
    pub fn get(&self, layer1: u32, layer2: u32) -> bool {
        if !CollisionLayers::is_valid(layer1) || !CollisionLayers::is_valid(layer2) {
            return false;
        }
        self.rows[layer1 as usize] & (1 << layer2) != 0
    }
    
    /// Re-enable every layer pair
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    
    /// Row mask of layers that `layer` collides with (0 for out-of-range ids)
    pub fn mask(&self, layer: u32) -> u32 {
        if CollisionLayers::is_valid(layer) {
            self.rows[layer as usize]
        } else {
            0
        }
    }
    
    fn write(&mut self, row: u32, column: u32, enable: bool) {
        let bit = 1 << column;
        if enable {
            self.rows[row as usize] |= bit;
        } else {
            self.rows[row as usize] &= !bit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_default_all_enabled() {
        let matrix = LayerCollisionMatrix::new();
        for a in 0..MAX_LAYERS {
            for b in 0..MAX_LAYERS {
                assert!(matrix.get(a, b));
            }
        }
    }
    
    #[test]
    fn test_set_is_symmetric() {
        let mut matrix = LayerCollisionMatrix::new();
        matrix.set(CollisionLayers::PLAYER, CollisionLayers::PICKUP, false).unwrap();
        
        assert!(!matrix.get(CollisionLayers::PLAYER, CollisionLayers::PICKUP));
        assert!(!matrix.get(CollisionLayers::PICKUP, CollisionLayers::PLAYER));
        assert!(matrix.get(CollisionLayers::PLAYER, CollisionLayers::ENEMY));
        
        matrix.set(CollisionLayers::PICKUP, CollisionLayers::PLAYER, true).unwrap();
        assert!(matrix.get(CollisionLayers::PLAYER, CollisionLayers::PICKUP));
    }
    
    #[test]
    fn test_self_layer_and_edge_layer() {
        let mut matrix = LayerCollisionMatrix::new();
        matrix.set(31, 31, false).unwrap();
        
        assert!(!matrix.get(31, 31));
        assert!(matrix.get(31, 30));
        assert_eq!(matrix.mask(31), u32::MAX >> 1);
    }
    
    #[test]
    fn test_out_of_range_rejected_without_mutation() {
        let mut matrix = LayerCollisionMatrix::new();
        let before = matrix;
        
        assert_eq!(
            matrix.set(32, 0, false),
            Err(PhysicsError::InvalidLayer { layer1: 32, layer2: 0 })
        );
        assert_eq!(matrix, before);
        assert!(!matrix.get(0, 32));
        assert_eq!(matrix.mask(40), 0);
    }
    
    #[test]
    fn test_reset() {
        let mut matrix = LayerCollisionMatrix::new();
        matrix.set(2, 3, false).unwrap();
        matrix.reset();
        assert!(matrix.get(2, 3));
    }
}
