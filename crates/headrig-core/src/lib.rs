//! Core types for headrig.
//!
//! This crate provides the data model and the pure orientation mapping used
//! throughout headrig:
//! - [`AttitudeSample`] and [`ScreenOrientation`] describing what the motion source reports
//! - [`compute_rig_angles`] turning a sample into [`CameraRigAngles`] for a nested rig
//! - [`compute_flat_euler`] for rigs without nested nodes
//! - Configuration options and errors

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod angles;
pub mod attitude;
pub mod error;
pub mod mapping;
pub mod options;

pub use angles::{degrees_to_radians, radians_to_degrees, rig_tilt_radians, RIG_TILT_DEGREES};
pub use attitude::{AttitudeSample, ScreenOrientation};
pub use error::{HeadrigError, Result};
pub use mapping::{
    compute_flat_euler, compute_rig_angles, CameraRigAngles, FlatRigEuler, MappingProfile,
};
pub use options::{DeliveryMode, Options, RigOptions};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};
