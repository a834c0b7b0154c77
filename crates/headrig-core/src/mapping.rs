//! Head orientation to camera rig mapping.
//!
//! The device is held upright in front of the eyes, so a raw attitude sample
//! cannot be applied to the camera as-is. This module turns a sample into the
//! angles for a three-level rig (yaw node, pitch node, roll node) and
//! compensates for the one landscape orientation the viewer supports.
//!
//! Both mappings are pure: every call depends only on its arguments. Values
//! are neither clamped nor filtered, so sensor jitter and NaN pass straight
//! through.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::attitude::{AttitudeSample, ScreenOrientation};

/// Angles applied to the nested rig nodes, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraRigAngles {
    /// Rotation of the inner (roll) node.
    pub roll: f64,
    /// Rotation of the middle (pitch) node.
    pub pitch: f64,
    /// Rotation of the outer (yaw) node.
    pub yaw: f64,
}

impl CameraRigAngles {
    /// Creates a new set of rig angles.
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }
}

/// Computes the rig angles for one frame.
///
/// Only [`ScreenOrientation::LandscapeLeft`] is corrected: roll and pitch are
/// negated and yaw is turned by half a revolution. Every other orientation
/// maps the sample through unchanged.
pub fn compute_rig_angles(
    sample: &AttitudeSample,
    screen_orientation: ScreenOrientation,
) -> CameraRigAngles {
    let landscape_left = screen_orientation == ScreenOrientation::LandscapeLeft;
    let correction_sign = if landscape_left { -1.0 } else { 1.0 };
    let yaw_offset = if landscape_left { PI } else { 0.0 };

    CameraRigAngles {
        roll: sample.roll * correction_sign,
        pitch: sample.pitch * correction_sign,
        yaw: sample.yaw - yaw_offset,
    }
}

/// Euler angles for a single-node rig, in radians.
///
/// Axis order follows the rig node convention: `x` rolls, `y` yaws,
/// `z` pitches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlatRigEuler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Computes the Euler angles for a rig without nested nodes.
///
/// The mount tilt (`tilt`, in radians) is folded into the roll axis on every
/// call and screen orientation is ignored.
pub fn compute_flat_euler(sample: &AttitudeSample, tilt: f64) -> FlatRigEuler {
    FlatRigEuler {
        x: sample.roll + tilt,
        y: sample.yaw,
        z: sample.pitch,
    }
}

/// Which mapping a tracker applies to incoming samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum MappingProfile {
    /// One node, tilt folded into roll, no landscape correction.
    Flat,
    /// Nested yaw/pitch/roll nodes with the landscape-left correction.
    #[default]
    Nested,
}
