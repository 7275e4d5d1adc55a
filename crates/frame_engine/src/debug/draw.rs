//! Debug drawing primitives and queue
//!
//! Shapes are queued here and read back by whatever renderer the host
//! application uses. Every shape carries a lifetime in seconds; a duration of
//! zero lives until the next `update`.

use crate::foundation::math::{Vec3, Vec4};

/// Debug shape primitives
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        start: Vec3,
        end: Vec3,
        color: Vec4,
        duration: f32,
    },
    
    /// Wireframe sphere
    Sphere {
        center: Vec3,
        radius: f32,
        color: Vec4,
        duration: f32,
    },
    
    /// Wireframe axis-aligned box with half-extents
    Box {
        center: Vec3,
        extents: Vec3,
        color: Vec4,
        duration: f32,
    },
    
    /// Point at position
    Point {
        position: Vec3,
        color: Vec4,
        size: f32,
        duration: f32,
    },
}

impl DebugShape {
    /// Get remaining duration
    pub fn duration(&self) -> f32 {
        match self {
            DebugShape::Line { duration, .. }
            | DebugShape::Sphere { duration, .. }
            | DebugShape::Box { duration, .. }
            | DebugShape::Point { duration, .. } => *duration,
        }
    }
    
    /// Color the shape is drawn with
    pub fn color(&self) -> Vec4 {
        match self {
            DebugShape::Line { color, .. }
            | DebugShape::Sphere { color, .. }
            | DebugShape::Box { color, .. }
            | DebugShape::Point { color, .. } => *color,
        }
    }
    
    /// Decrease duration by delta_time, returns true if expired
    pub fn tick(&mut self, delta_time: f32) -> bool {
        match self {
            DebugShape::Line { duration, .. }
            | DebugShape::Sphere { duration, .. }
            | DebugShape::Box { duration, .. }
            | DebugShape::Point { duration, .. } => {
                *duration -= delta_time;
                *duration <= 0.0
            }
        }
    }
}

/// Queue of debug shapes awaiting rendering
#[derive(Debug)]
pub struct DebugDrawSystem {
    shapes: Vec<DebugShape>,
    
    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            enabled: true,
        }
    }
    
    /// Draw a line segment
    pub fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec4, duration: f32) {
        self.push(DebugShape::Line { start, end, color, duration });
    }
    
    /// Draw a wireframe sphere
    pub fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Vec4, duration: f32) {
        self.push(DebugShape::Sphere { center, radius, color, duration });
    }
    
    /// Draw a wireframe box
    pub fn draw_box(&mut self, center: Vec3, extents: Vec3, color: Vec4, duration: f32) {
        self.push(DebugShape::Box { center, extents, color, duration });
    }
    
    /// Draw a point
    pub fn draw_point(&mut self, position: Vec3, color: Vec4, size: f32, duration: f32) {
        self.push(DebugShape::Point { position, color, size, duration });
    }
    
    fn push(&mut self, shape: DebugShape) {
        if self.enabled {
            self.shapes.push(shape);
        }
    }
    
    /// Age every shape and drop the expired ones
    pub fn update(&mut self, delta_time: f32) {
        self.shapes.retain_mut(|shape| !shape.tick(delta_time));
    }
    
    /// Shapes queued for rendering
    pub fn shapes(&self) -> &[DebugShape] {
        if self.enabled {
            &self.shapes
        } else {
            &[]
        }
    }
    
    /// Number of queued shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
    
    /// Drop every shape
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_shape_expiration() {
        let mut system = DebugDrawSystem::new();
        
        system.draw_sphere(Vec3::zeros(), 1.0, Vec4::new(1.0, 0.0, 0.0, 1.0), 1.0);
        assert_eq!(system.shape_count(), 1);
        
        system.update(0.5);
        assert_eq!(system.shape_count(), 1);
        
        system.update(0.6);
        assert_eq!(system.shape_count(), 0);
    }
    
    #[test]
    fn test_single_frame_shapes() {
        let mut system = DebugDrawSystem::new();
        system.draw_line(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), Vec4::new(1.0, 1.0, 1.0, 1.0), 0.0);
        system.draw_point(Vec3::zeros(), Vec4::new(1.0, 1.0, 1.0, 1.0), 2.0, 0.0);
        assert_eq!(system.shapes().len(), 2);
        
        system.update(1.0 / 60.0);
        assert_eq!(system.shape_count(), 0);
    }
    
    #[test]
    fn test_disabled_drops_shapes() {
        let mut system = DebugDrawSystem::new();
        system.enabled = false;
        system.draw_box(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), Vec4::new(0.0, 1.0, 0.0, 1.0), 5.0);
        
        assert_eq!(system.shape_count(), 0);
        assert!(system.shapes().is_empty());
    }
}
