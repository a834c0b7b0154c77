//! Per-eye cameras and the stereo pair.

use glam::{Mat4, Vec3};

/// Which eye a camera renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    /// Both eyes, left first.
    pub const BOTH: [Eye; 2] = [Eye::Left, Eye::Right];

    /// Sign of this eye's horizontal offset from the rig center.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Eye::Left => -1.0,
            Eye::Right => 1.0,
        }
    }
}

/// A perspective camera for one eye.
///
/// Looks down -Z in its local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EyeCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Horizontal field of view in radians when fixed independently of the viewport.
    pub fixed_fov_x: Option<f32>,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Default for EyeCamera {
    fn default() -> Self {
        Self {
            fov_y: 60.0_f32.to_radians(),
            fixed_fov_x: None,
            aspect_ratio: 1.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl EyeCamera {
    /// Creates a camera with the default projection.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Self::default()
        }
    }

    /// Creates a camera whose horizontal and vertical field of view are both
    /// fixed to `degrees`, regardless of the viewport.
    #[must_use]
    pub fn with_fixed_fov(degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self {
            fov_y: radians,
            fixed_fov_x: Some(radians),
            ..Self::default()
        }
    }

    /// Sets the vertical field of view from a horizontal one at the current aspect ratio.
    pub fn set_horizontal_fov(&mut self, degrees: f32) {
        // tan(v/2) = tan(h/2) / aspect
        let h = degrees.to_radians();
        self.fov_y = 2.0 * ((h / 2.0).tan() / self.aspect_ratio).atan();
        self.fixed_fov_x = None;
    }

    /// Sets the viewport aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Aspect ratio the projection actually uses.
    #[must_use]
    pub fn effective_aspect(&self) -> f32 {
        match self.fixed_fov_x {
            Some(fov_x) => (fov_x / 2.0).tan() / (self.fov_y / 2.0).tan(),
            None => self.aspect_ratio,
        }
    }

    /// Horizontal field of view in radians.
    #[must_use]
    pub fn fov_x(&self) -> f32 {
        self.fixed_fov_x
            .unwrap_or_else(|| 2.0 * ((self.fov_y / 2.0).tan() * self.aspect_ratio).atan())
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.effective_aspect(), self.near, self.far)
    }
}

/// Two eye cameras sharing one rig.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoPair {
    pub left: EyeCamera,
    pub right: EyeCamera,
    /// Horizontal distance of each eye from the pair's center.
    pub eye_offset: f32,
    /// Distance both eyes sit behind the center along the view axis.
    pub pull_back: f32,
}

impl StereoPair {
    /// Creates a pair from one camera template.
    #[must_use]
    pub fn new(camera: EyeCamera, eye_offset: f32, pull_back: f32) -> Self {
        Self {
            left: camera.clone(),
            right: camera,
            eye_offset,
            pull_back,
        }
    }

    /// Returns the camera for `eye`.
    #[must_use]
    pub fn camera(&self, eye: Eye) -> &EyeCamera {
        match eye {
            Eye::Left => &self.left,
            Eye::Right => &self.right,
        }
    }

    /// Sets the aspect ratio of both eyes, e.g. after a viewport resize.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.left.set_aspect_ratio(aspect_ratio);
        self.right.set_aspect_ratio(aspect_ratio);
    }

    /// Position of `eye` relative to the innermost rig node.
    #[must_use]
    pub fn local_position(&self, eye: Eye) -> Vec3 {
        Vec3::new(eye.sign() * self.eye_offset, 0.0, self.pull_back)
    }
}

/// GPU-compatible per-eye camera uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EyeUniforms {
    /// World-to-eye matrix.
    pub view: [[f32; 4]; 4],
    /// Eye projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Eye position in world space.
    pub position: [f32; 3],
    pub _padding: f32,
}

impl Default for EyeUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _padding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_fov_ignores_viewport() {
        let mut camera = EyeCamera::with_fixed_fov(45.0);
        let before = camera.projection_matrix();
        camera.set_aspect_ratio(2.5);
        assert_eq!(camera.projection_matrix(), before);
        assert!((camera.effective_aspect() - 1.0).abs() < 1e-6);
        assert!((camera.fov_x().to_degrees() - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_horizontal_fov_conversion() {
        let mut camera = EyeCamera::new(2.0);
        camera.set_horizontal_fov(90.0);
        assert!((camera.fov_x().to_degrees() - 90.0).abs() < 1e-3);
        assert!(camera.fov_y < camera.fov_x());
    }

    #[test]
    fn test_eye_positions_are_mirrored() {
        let pair = StereoPair::new(EyeCamera::default(), 0.5, 3.0);
        assert_eq!(pair.local_position(Eye::Left), Vec3::new(-0.5, 0.0, 3.0));
        assert_eq!(pair.local_position(Eye::Right), Vec3::new(0.5, 0.0, 3.0));
    }

    #[test]
    fn test_uniforms_are_plain_bytes() {
        let uniforms = EyeUniforms::default();
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 4 * (16 + 16 + 4));
    }
}
