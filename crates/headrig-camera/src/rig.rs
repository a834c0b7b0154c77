//! The head-tracked camera rig.
//!
//! The rig is a strict owning chain of transforms:
//!
//! ```text
//! mount (one-time tilt about X)
//!   └─ yaw node   (about Y)
//!       └─ pitch node (about Z)
//!           └─ roll node  (about X)
//!               └─ stereo pair (left / right eye)
//! ```
//!
//! Per-frame updates assign each node's angle directly; nothing accumulates
//! between frames.

use glam::{Mat4, Vec3};
use headrig_core::{degrees_to_radians, CameraRigAngles, FlatRigEuler, RigOptions};

use crate::camera::{Eye, EyeCamera, EyeUniforms, StereoPair};
use crate::transform::{RotationAxis, Transform};

/// One rig level rotating about a fixed axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisNode {
    axis: RotationAxis,
    angle: f64,
    transform: Transform,
}

impl AxisNode {
    /// Creates a node at rest.
    #[must_use]
    pub fn new(axis: RotationAxis) -> Self {
        Self {
            axis,
            angle: 0.0,
            transform: Transform::identity(),
        }
    }

    /// The axis this node rotates about.
    #[must_use]
    pub fn axis(&self) -> RotationAxis {
        self.axis
    }

    /// The last assigned angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Assigns the node's rotation.
    pub fn set_angle(&mut self, radians: f64) {
        self.angle = radians;
        self.transform.set_axis_rotation(self.axis, radians as f32);
    }

    /// Local transform of this node.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

/// A mount, three single-axis nodes, and a stereo pair.
#[derive(Debug, Clone)]
pub struct CameraRig {
    mount: Transform,
    tilt: f64,
    yaw: AxisNode,
    pitch: AxisNode,
    roll: AxisNode,
    stereo: StereoPair,
}

impl CameraRig {
    /// Builds the rig and applies the mount tilt.
    #[must_use]
    pub fn new(options: &RigOptions) -> Self {
        let camera = options
            .fixed_fov_degrees
            .map_or_else(EyeCamera::default, EyeCamera::with_fixed_fov);
        let tilt = degrees_to_radians(options.tilt_degrees);

        let mut mount = Transform::identity();
        mount.set_axis_rotation(RotationAxis::X, tilt as f32);

        log::debug!(
            "built camera rig: tilt {}°, eye offset {}, pull-back {}, fov {:?}",
            options.tilt_degrees,
            options.eye_offset,
            options.pull_back,
            options.fixed_fov_degrees
        );

        Self {
            mount,
            tilt,
            yaw: AxisNode::new(RotationAxis::Y),
            pitch: AxisNode::new(RotationAxis::Z),
            roll: AxisNode::new(RotationAxis::X),
            stereo: StereoPair::new(camera, options.eye_offset, options.pull_back),
        }
    }

    /// Assigns the three node angles.
    pub fn apply_angles(&mut self, angles: CameraRigAngles) {
        // A preceding flat update may have replaced the mount rotation.
        self.mount.set_axis_rotation(RotationAxis::X, self.tilt as f32);
        self.yaw.set_angle(angles.yaw);
        self.pitch.set_angle(angles.pitch);
        self.roll.set_angle(angles.roll);
    }

    /// Assigns all three angles to the mount and rests the nested nodes.
    ///
    /// The tilt is expected to be folded into `euler.x` already.
    pub fn apply_flat(&mut self, euler: FlatRigEuler) {
        self.mount
            .set_euler_angles(Vec3::new(euler.x as f32, euler.y as f32, euler.z as f32));
        self.yaw.set_angle(0.0);
        self.pitch.set_angle(0.0);
        self.roll.set_angle(0.0);
    }

    /// The mount tilt in radians.
    #[must_use]
    pub fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Angles currently held by the nested nodes.
    #[must_use]
    pub fn angles(&self) -> CameraRigAngles {
        CameraRigAngles {
            roll: self.roll.angle(),
            pitch: self.pitch.angle(),
            yaw: self.yaw.angle(),
        }
    }

    /// The mount transform.
    #[must_use]
    pub fn mount(&self) -> &Transform {
        &self.mount
    }

    /// The yaw, pitch, and roll nodes, outermost first.
    #[must_use]
    pub fn nodes(&self) -> [&AxisNode; 3] {
        [&self.yaw, &self.pitch, &self.roll]
    }

    /// The stereo pair.
    #[must_use]
    pub fn stereo(&self) -> &StereoPair {
        &self.stereo
    }

    /// Mutable access to the stereo pair, e.g. to resize viewports.
    pub fn stereo_mut(&mut self) -> &mut StereoPair {
        &mut self.stereo
    }

    /// World transform of the innermost node.
    #[must_use]
    pub fn head_matrix(&self) -> Mat4 {
        self.mount.to_matrix()
            * self.yaw.transform().to_matrix()
            * self.pitch.transform().to_matrix()
            * self.roll.transform().to_matrix()
    }

    /// World transform of `eye`.
    #[must_use]
    pub fn eye_world_matrix(&self, eye: Eye) -> Mat4 {
        self.head_matrix() * Mat4::from_translation(self.stereo.local_position(eye))
    }

    /// World position of `eye`.
    #[must_use]
    pub fn eye_world_position(&self, eye: Eye) -> Vec3 {
        self.eye_world_matrix(eye).transform_point3(Vec3::ZERO)
    }

    /// World-space view direction, shared by both eyes.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.head_matrix().transform_vector3(Vec3::NEG_Z).normalize()
    }

    /// World-to-eye matrix for `eye`.
    #[must_use]
    pub fn eye_view_matrix(&self, eye: Eye) -> Mat4 {
        self.eye_world_matrix(eye).inverse()
    }

    /// Uniforms for rendering `eye`.
    #[must_use]
    pub fn eye_uniforms(&self, eye: Eye) -> EyeUniforms {
        EyeUniforms {
            view: self.eye_view_matrix(eye).to_cols_array_2d(),
            projection: self.stereo.camera(eye).projection_matrix().to_cols_array_2d(),
            position: self.eye_world_position(eye).to_array(),
            _padding: 0.0,
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(&RigOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_tilt_points_view_down_at_rest() {
        // Tilting by -90° about X turns -Z (forward) into -Y.
        let rig = CameraRig::new(&RigOptions::landscape_corrected());
        assert!(approx(rig.forward(), Vec3::NEG_Y));
    }

    #[test]
    fn test_apply_overwrites_instead_of_accumulating() {
        let mut rig = CameraRig::default();
        rig.apply_angles(CameraRigAngles::new(0.1, 0.2, 0.3));
        rig.apply_angles(CameraRigAngles::new(0.1, 0.2, 0.3));
        assert_eq!(rig.angles(), CameraRigAngles::new(0.1, 0.2, 0.3));

        let mut once = CameraRig::default();
        once.apply_angles(CameraRigAngles::new(0.1, 0.2, 0.3));
        assert_eq!(rig.head_matrix(), once.head_matrix());
    }

    #[test]
    fn test_node_axes() {
        let rig = CameraRig::default();
        let axes: Vec<_> = rig.nodes().iter().map(|n| n.axis()).collect();
        assert_eq!(axes, vec![RotationAxis::Y, RotationAxis::Z, RotationAxis::X]);
    }

    #[test]
    fn test_eyes_straddle_head_center() {
        let rig = CameraRig::new(&RigOptions::landscape_corrected());
        let left = rig.eye_world_position(Eye::Left);
        let right = rig.eye_world_position(Eye::Right);
        assert!(approx((left + right) * 0.5, Vec3::ZERO));
        assert!(((right - left).length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pull_back_moves_eyes_behind_view() {
        let rig = CameraRig::new(&RigOptions::polled());
        let center = (rig.eye_world_position(Eye::Left) + rig.eye_world_position(Eye::Right)) * 0.5;
        assert!(approx(center, -rig.forward() * 3.0));
    }

    #[test]
    fn test_flat_matches_tilt_at_rest() {
        let mut flat = CameraRig::new(&RigOptions::earliest());
        flat.apply_flat(FlatRigEuler {
            x: -f64::from(FRAC_PI_2),
            y: 0.0,
            z: 0.0,
        });
        let mut nested = CameraRig::new(&RigOptions::earliest());
        nested.apply_angles(CameraRigAngles::default());
        assert!(approx(flat.forward(), nested.forward()));
    }

    #[test]
    fn test_tilt_accessor_uses_options() {
        let rig = CameraRig::new(&RigOptions {
            tilt_degrees: 0.0,
            ..RigOptions::earliest()
        });
        assert_eq!(rig.tilt(), 0.0);
        assert!(approx(rig.forward(), Vec3::NEG_Z));
    }

    #[test]
    fn test_nested_restores_tilt_after_flat() {
        let mut rig = CameraRig::new(&RigOptions::landscape_corrected());
        rig.apply_flat(FlatRigEuler {
            x: 0.4,
            y: 0.5,
            z: 0.6,
        });
        rig.apply_angles(CameraRigAngles::default());
        assert!(approx(rig.forward(), Vec3::NEG_Y));
    }

    #[test]
    fn test_fixed_fov_from_options() {
        let rig = CameraRig::new(&RigOptions::earliest());
        let camera = rig.stereo().camera(Eye::Left);
        assert!((camera.fov_y.to_degrees() - 45.0).abs() < 1e-4);
        assert!(camera.fixed_fov_x.is_some());

        let rig = CameraRig::new(&RigOptions::polled());
        assert!(rig.stereo().camera(Eye::Right).fixed_fov_x.is_none());
    }

    #[test]
    fn test_eye_uniforms_view_inverts_world() {
        let mut rig = CameraRig::default();
        rig.apply_angles(CameraRigAngles::new(0.3, -0.2, 1.1));
        let uniforms = rig.eye_uniforms(Eye::Right);
        let view = Mat4::from_cols_array_2d(&uniforms.view);
        let eye = Vec3::from_array(uniforms.position);
        assert!(approx(view.transform_point3(eye), Vec3::ZERO));
    }

    proptest::proptest! {
        #[test]
        fn prop_rotation_keeps_eye_separation(
            roll in -6.3f64..6.3,
            pitch in -6.3f64..6.3,
            yaw in -6.3f64..6.3,
        ) {
            let mut rig = CameraRig::default();
            rig.apply_angles(CameraRigAngles::new(roll, pitch, yaw));
            let separation =
                (rig.eye_world_position(Eye::Right) - rig.eye_world_position(Eye::Left)).length();
            proptest::prop_assert!((separation - 1.0).abs() < 1e-4);
        }
    }
}
