//! Collision-specific debug visualization

use crate::debug::draw::{DebugDrawSystem, DebugShape};
use crate::ecs::TransformProvider;
use crate::foundation::math::Vec4;
use crate::physics::collider::Collider;
use crate::physics::collision::WorldSpaceShape;
use crate::physics::collision_info::CollisionInfo;

/// Color scheme for collision visualization
#[derive(Clone, Debug)]
pub struct CollisionDebugColors {
    /// Solid colliders
    pub solid: Vec4,
    
    /// Trigger volumes
    pub trigger: Vec4,
    
    /// Contact normals
    pub contact: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            solid: Vec4::new(0.0, 1.0, 0.0, 1.0),   // Green
            trigger: Vec4::new(1.0, 1.0, 0.0, 1.0), // Yellow
            contact: Vec4::new(1.0, 0.0, 0.0, 1.0), // Red
        }
    }
}

/// Draws colliders and contacts into a [`DebugDrawSystem`]
///
/// All shapes are single-frame; call [`update`](Self::update) once per frame
/// after rendering so the next frame starts from an empty queue.
#[derive(Debug)]
pub struct CollisionDebugVisualizer {
    debug_draw: DebugDrawSystem,
    colors: CollisionDebugColors,
    
    /// Show contact points and normals
    pub show_contacts: bool,
}

impl CollisionDebugVisualizer {
    /// Create a new collision debug visualizer
    pub fn new() -> Self {
        Self {
            debug_draw: DebugDrawSystem::new(),
            colors: CollisionDebugColors::default(),
            show_contacts: true,
        }
    }
    
    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }
    
    /// Draw one collider at its current world position
    ///
    /// Disabled colliders and shapes without a world-space form draw nothing.
    pub fn draw_collider(&mut self, collider: &Collider, owners: &impl TransformProvider) {
        if !collider.is_enabled() {
            return;
        }
        
        let color = if collider.is_trigger() {
            self.colors.trigger
        } else {
            self.colors.solid
        };
        
        match collider.world_shape(owners) {
            Some(WorldSpaceShape::Sphere(sphere)) => {
                self.debug_draw.draw_sphere(sphere.center, sphere.radius, color, 0.0);
            }
            Some(WorldSpaceShape::Aabb(aabb)) => {
                self.debug_draw.draw_box(aabb.center, aabb.half_extents, color, 0.0);
            }
            None => {}
        }
    }
    
    /// Draw a contact point with a unit-length normal
    pub fn draw_contact(&mut self, info: &CollisionInfo) {
        if !self.show_contacts {
            return;
        }
        
        self.debug_draw.draw_point(info.contact_point, self.colors.contact, 4.0, 0.0);
        self.debug_draw.draw_line(
            info.contact_point,
            info.contact_point + info.contact_normal,
            self.colors.contact,
            0.0,
        );
    }
    
    /// Expire last frame's shapes
    pub fn update(&mut self, delta_time: f32) {
        self.debug_draw.update(delta_time);
    }
    
    /// Clear all visualization
    pub fn clear(&mut self) {
        self.debug_draw.clear();
    }
    
    /// Get all debug shapes for rendering
    pub fn shapes(&self) -> &[DebugShape] {
        self.debug_draw.shapes()
    }
    
    /// Enable/disable the entire debug system
    pub fn set_enabled(&mut self, enabled: bool) {
        self.debug_draw.enabled = enabled;
    }
    
    /// Check if debug system is enabled
    pub fn is_enabled(&self) -> bool {
        self.debug_draw.enabled
    }
    
    /// Get reference to underlying debug draw system
    pub fn debug_draw(&self) -> &DebugDrawSystem {
        &self.debug_draw
    }
}

impl Default for CollisionDebugVisualizer {
    fn default() -> Self {
        Self::new()
    }
}
