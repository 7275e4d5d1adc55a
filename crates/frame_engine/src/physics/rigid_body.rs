//! Rigid body component
//!
//! Explicit Euler integration of forces, gravity and drag. Collision response
//! is not applied here; the collision manager only reports contacts.

use crate::foundation::math::{Transform, Vec3};

/// Smallest mass a body may have
pub const MIN_MASS: f32 = 0.001;

/// Angular speeds below this do not rotate the transform
const ANGULAR_EPSILON: f32 = 0.001;

/// Dynamic body driven by forces
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// Linear velocity in units per second
    pub velocity: Vec3,
    
    /// Acceleration computed on the last step
    pub acceleration: Vec3,
    
    /// Angular velocity in radians per second
    pub angular_velocity: Vec3,
    
    /// Fraction of linear velocity removed each step
    pub drag: f32,
    
    /// Fraction of angular velocity removed each step
    pub angular_drag: f32,
    
    /// Whether the shared gravity vector applies
    pub use_gravity: bool,
    
    mass: f32,
    is_kinematic: bool,
    force: Vec3,
    torque: Vec3,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            drag: 0.0,
            angular_drag: 0.05,
            use_gravity: true,
            mass: 1.0,
            is_kinematic: false,
            force: Vec3::zeros(),
            torque: Vec3::zeros(),
        }
    }
}

impl RigidBody {
    /// Create a body with unit mass
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Create a body with initial velocity
    pub fn with_velocity(velocity: Vec3) -> Self {
        Self {
            velocity,
            ..Self::default()
        }
    }
    
    /// Kinematic bodies are moved by game code only
    pub fn kinematic() -> Self {
        Self {
            is_kinematic: true,
            ..Self::default()
        }
    }
    
    /// Mass in kilograms
    pub fn mass(&self) -> f32 {
        self.mass
    }
    
    /// Set mass; non-positive values are raised to [`MIN_MASS`]
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = if mass > 0.0 { mass } else { MIN_MASS };
    }
    
    /// Whether forces are ignored
    pub fn is_kinematic(&self) -> bool {
        self.is_kinematic
    }
    
    /// Toggle kinematic mode
    pub fn set_kinematic(&mut self, kinematic: bool) {
        self.is_kinematic = kinematic;
    }
    
    /// Accumulate a force for the next step
    pub fn add_force(&mut self, force: Vec3) {
        if !self.is_kinematic {
            self.force += force;
        }
    }
    
    /// Change velocity immediately by `impulse / mass`
    pub fn add_impulse(&mut self, impulse: Vec3) {
        if !self.is_kinematic {
            self.velocity += impulse / self.mass;
        }
    }
    
    /// Accumulate a torque for the next step
    pub fn add_torque(&mut self, torque: Vec3) {
        if !self.is_kinematic {
            self.torque += torque;
        }
    }
    
    /// Force accumulated since the last step
    pub fn accumulated_force(&self) -> Vec3 {
        self.force
    }
    
    /// Torque accumulated since the last step
    pub fn accumulated_torque(&self) -> Vec3 {
        self.torque
    }
    
    /// Advance the body and its transform by `delta_time`
    pub fn integrate(&mut self, transform: &mut Transform, gravity: Vec3, delta_time: f32) {
        if self.is_kinematic {
            return;
        }
        
        self.acceleration = self.force / self.mass;
        if self.use_gravity {
            self.acceleration += gravity;
        }
        
        self.velocity += self.acceleration * delta_time;
        self.velocity *= 1.0 - self.drag;
        
        self.angular_velocity += self.torque * delta_time;
        self.angular_velocity *= 1.0 - self.angular_drag;
        
        transform.translate(self.velocity * delta_time);
        
        if self.angular_velocity.magnitude() > ANGULAR_EPSILON {
            transform.rotate_scaled_axis(self.angular_velocity * delta_time);
        }
        
        self.force = Vec3::zeros();
        self.torque = Vec3::zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    
    fn gravity() -> Vec3 {
        Vec3::new(0.0, -9.8, 0.0)
    }
    
    #[test]
    fn test_gravity_step() {
        let mut body = RigidBody::new();
        let mut transform = Transform::identity();
        
        body.integrate(&mut transform, gravity(), 0.5);
        
        assert_relative_eq!(body.velocity, Vec3::new(0.0, -4.9, 0.0));
        assert_relative_eq!(transform.position, Vec3::new(0.0, -2.45, 0.0));
    }
    
    #[test]
    fn test_gravity_disabled() {
        let mut body = RigidBody::new();
        body.use_gravity = false;
        let mut transform = Transform::identity();
        
        body.integrate(&mut transform, gravity(), 1.0);
        assert_eq!(transform.position, Vec3::zeros());
    }
    
    #[test]
    fn test_force_divided_by_mass_and_cleared() {
        let mut body = RigidBody::new();
        body.use_gravity = false;
        body.set_mass(2.0);
        body.add_force(Vec3::new(4.0, 0.0, 0.0));
        
        let mut transform = Transform::identity();
        body.integrate(&mut transform, gravity(), 1.0);
        
        assert_relative_eq!(body.acceleration, Vec3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(body.velocity, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(body.accumulated_force(), Vec3::zeros());
        
        body.integrate(&mut transform, gravity(), 1.0);
        assert_relative_eq!(body.velocity, Vec3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(transform.position, Vec3::new(4.0, 0.0, 0.0));
    }
    
    #[test]
    fn test_drag() {
        let mut body = RigidBody::with_velocity(Vec3::new(10.0, 0.0, 0.0));
        body.use_gravity = false;
        body.drag = 0.1;
        
        body.integrate(&mut Transform::identity(), gravity(), 0.1);
        assert_relative_eq!(body.velocity.x, 9.0);
    }
    
    #[test]
    fn test_impulse() {
        let mut body = RigidBody::new();
        body.set_mass(4.0);
        body.add_impulse(Vec3::new(0.0, 8.0, 0.0));
        assert_relative_eq!(body.velocity, Vec3::new(0.0, 2.0, 0.0));
    }
    
    #[test]
    fn test_mass_clamped() {
        let mut body = RigidBody::new();
        body.set_mass(0.0);
        assert_relative_eq!(body.mass(), MIN_MASS);
        body.set_mass(-3.0);
        assert_relative_eq!(body.mass(), MIN_MASS);
    }
    
    #[test]
    fn test_kinematic_ignores_forces() {
        let mut body = RigidBody::kinematic();
        body.add_force(Vec3::new(1.0, 0.0, 0.0));
        body.add_impulse(Vec3::new(1.0, 0.0, 0.0));
        body.add_torque(Vec3::new(1.0, 0.0, 0.0));
        
        let mut transform = Transform::identity();
        body.integrate(&mut transform, gravity(), 1.0);
        
        assert_eq!(body.velocity, Vec3::zeros());
        assert_eq!(body.accumulated_torque(), Vec3::zeros());
        assert_eq!(transform.position, Vec3::zeros());
    }
    
    #[test]
    fn test_torque_rotates() {
        let mut body = RigidBody::new();
        body.use_gravity = false;
        body.angular_drag = 0.0;
        body.add_torque(Vec3::new(0.0, 1.0, 0.0));
        
        let mut transform = Transform::identity();
        body.integrate(&mut transform, gravity(), 1.0);
        
        assert_relative_eq!(body.angular_velocity, Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(transform.rotation.angle(), 1.0, epsilon = 1e-5);
    }
    
    #[test]
    fn test_tiny_spin_does_not_rotate() {
        let mut body = RigidBody::new();
        body.use_gravity = false;
        body.angular_velocity = Vec3::new(0.0, 0.0005, 0.0);
        
        let mut transform = Transform::identity();
        body.integrate(&mut transform, gravity(), 1.0);
        assert_eq!(transform.rotation, Transform::identity().rotation);
    }
}
