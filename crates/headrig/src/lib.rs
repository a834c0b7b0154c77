//! headrig: a head-tracked stereo camera rig.
//!
//! A phone held in a viewer drives two side-by-side cameras from its motion
//! sensors. headrig turns each attitude sample into rotations for a nested
//! camera rig and hands per-eye matrices to whatever renders the scene.
//!
//! # Quick Start
//!
//! ```
//! use headrig::*;
//!
//! fn main() -> Result<()> {
//!     let source = PushMotionSource::new();
//!     let publisher = source.publisher();
//!
//!     let mut tracker = HeadTracker::new(source, &Options::default())?;
//!     tracker.start();
//!
//!     // Called from the platform's sensor callback.
//!     publisher.publish(AttitudeSample::new(0.2, -0.1, 1.0));
//!
//!     // Called once per rendered frame.
//!     let update = tracker.tick();
//!     assert!(update.is_applied());
//!     let left = tracker.rig().eye_uniforms(Eye::Left);
//!     # let _ = left;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`compute_rig_angles`] is the pure mapping from sample and screen
//!   orientation to rig angles.
//! - [`CameraRig`] holds the mount, yaw, pitch, and roll nodes and the
//!   [`StereoPair`].
//! - [`MotionSource`] implementations feed a [`HeadTracker`], which applies
//!   the mapping once per [`tick`](HeadTracker::tick).

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod init;
mod motion;
mod tracker;

// Re-export core types
pub use headrig_core::{
    compute_flat_euler, compute_rig_angles, degrees_to_radians,
    error::{HeadrigError, Result},
    radians_to_degrees, AttitudeSample, CameraRigAngles, DeliveryMode, FlatRigEuler,
    MappingProfile, Options, RigOptions, ScreenOrientation, Mat4, Quat, Vec3, RIG_TILT_DEGREES,
};

// Re-export rig types
pub use headrig_camera::{
    AxisNode, CameraRig, Eye, EyeCamera, EyeUniforms, RotationAxis, StereoPair, Transform,
};

pub use init::{init, init_logging};
pub use motion::{
    MotionPublisher, MotionSource, PushMotionSource, SampleRegister, ScriptedMotionSource,
};
pub use tracker::{FrameUpdate, HeadTracker};
