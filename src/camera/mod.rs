//! Camera system for the molecule view.
//!
//! Provides a perspective camera and an orbit controller with damped
//! rotation, panning, zoom, and fit-to-bounds.

/// Orbit controller managing rotation, pan, zoom, and damping.
pub mod controller;
/// Core camera struct and GPU uniform type.
pub mod core;

pub use controller::OrbitController;
pub use self::core::{Camera, CameraUniform};
