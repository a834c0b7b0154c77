//! Camera rig for headrig.
//!
//! Provides the nested yaw/pitch/roll rig that head-tracking angles are
//! applied to, and the stereo eye pair it carries.

#![allow(clippy::missing_panics_doc)]
// Attitude angles are f64, render transforms are f32
#![allow(clippy::cast_possible_truncation)]

pub mod camera;
pub mod rig;
pub mod transform;

pub use camera::{Eye, EyeCamera, EyeUniforms, StereoPair};
pub use rig::{AxisNode, CameraRig};
pub use transform::{RotationAxis, Transform};
