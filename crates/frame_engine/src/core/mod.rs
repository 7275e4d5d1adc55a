//! # Core Engine Module
//!
//! Shared configuration types consumed by setup code before the frame loop
//! starts. Subsystems receive their section by reference and copy what they
//! need; nothing here is consulted again once a frame is running.

pub mod config;

pub use config::{
    ApplicationConfig,
    PhysicsConfig,
    TimeConfig,
};
pub use crate::config::{Config, ConfigError};
