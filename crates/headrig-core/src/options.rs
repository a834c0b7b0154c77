//! Configuration options for headrig.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angles::RIG_TILT_DEGREES;
use crate::attitude::ScreenOrientation;
use crate::error::{HeadrigError, Result};
use crate::mapping::MappingProfile;

/// How attitude samples reach the tracker.
///
/// Under [`DeliveryMode::Poll`] a tracker asks its source for a fresh reading
/// every frame; under [`DeliveryMode::Push`] it only reads what the platform
/// callback has already delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryMode {
    /// The platform pushes samples through a callback.
    Push,
    /// The render loop polls the source once per frame.
    #[default]
    Poll,
}

/// Geometry of the camera rig.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RigOptions {
    /// Fixed horizontal and vertical field of view in degrees.
    /// `None` keeps the eye camera's default projection.
    pub fixed_fov_degrees: Option<f32>,
    /// Horizontal distance of each eye from the rig center.
    pub eye_offset: f32,
    /// One-time tilt of the rig mount about X, in degrees.
    pub tilt_degrees: f64,
    /// Distance the eyes sit behind the rig center along the view axis.
    pub pull_back: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self::polled()
    }
}

impl RigOptions {
    /// Single-node rig with a fixed 45 degree field of view.
    pub fn earliest() -> Self {
        Self {
            fixed_fov_degrees: Some(45.0),
            eye_offset: 0.5,
            tilt_degrees: RIG_TILT_DEGREES,
            pull_back: 0.0,
        }
    }

    /// Nested rig with default field of view.
    pub fn landscape_corrected() -> Self {
        Self {
            fixed_fov_degrees: None,
            ..Self::earliest()
        }
    }

    /// Nested rig with the eyes pulled back three units.
    pub fn polled() -> Self {
        Self {
            pull_back: 3.0,
            ..Self::landscape_corrected()
        }
    }

    /// Sets a fixed field of view in degrees.
    #[must_use]
    pub fn with_fixed_fov(mut self, degrees: f32) -> Self {
        self.fixed_fov_degrees = Some(degrees);
        self
    }

    /// Sets the per-eye horizontal offset.
    #[must_use]
    pub fn with_eye_offset(mut self, offset: f32) -> Self {
        self.eye_offset = offset;
        self
    }

    /// Sets the pull-back distance.
    #[must_use]
    pub fn with_pull_back(mut self, distance: f32) -> Self {
        self.pull_back = distance;
        self
    }

    /// Checks that every value is usable by the rig.
    pub fn validate(&self) -> Result<()> {
        if let Some(fov) = self.fixed_fov_degrees {
            if !(fov > 0.0 && fov < 180.0) {
                return Err(invalid("fixed_fov_degrees", format!("{fov} is outside (0, 180)")));
            }
        }
        if !self.eye_offset.is_finite() || self.eye_offset < 0.0 {
            return Err(invalid(
                "eye_offset",
                format!("{} must be finite and not negative", self.eye_offset),
            ));
        }
        if !self.tilt_degrees.is_finite() {
            return Err(invalid("tilt_degrees", "must be finite".to_string()));
        }
        if !self.pull_back.is_finite() {
            return Err(invalid("pull_back", "must be finite".to_string()));
        }
        Ok(())
    }
}

/// Global configuration options for a head tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Mapping applied to each sample.
    pub profile: MappingProfile,

    /// Sample delivery style of the host platform.
    pub delivery: DeliveryMode,

    /// Requested interval between motion updates, in seconds.
    pub update_interval: f64,

    /// Orientation assumed until the platform reports one.
    pub screen_orientation: ScreenOrientation,

    /// Rig geometry.
    pub rig: RigOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self::polled()
    }
}

impl Options {
    /// Single rig node, pushed samples, no landscape handling.
    pub fn earliest() -> Self {
        Self {
            profile: MappingProfile::Flat,
            delivery: DeliveryMode::Push,
            update_interval: 1.0 / 60.0,
            screen_orientation: ScreenOrientation::Portrait,
            rig: RigOptions::earliest(),
        }
    }

    /// Nested rig, pushed samples, landscape-left correction.
    pub fn landscape_corrected() -> Self {
        Self {
            profile: MappingProfile::Nested,
            rig: RigOptions::landscape_corrected(),
            ..Self::earliest()
        }
    }

    /// Nested rig polled once per frame, eyes pulled back.
    pub fn polled() -> Self {
        Self {
            delivery: DeliveryMode::Poll,
            rig: RigOptions::polled(),
            ..Self::landscape_corrected()
        }
    }

    /// Sets the mapping profile.
    #[must_use]
    pub fn with_profile(mut self, profile: MappingProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the initial screen orientation.
    #[must_use]
    pub fn with_screen_orientation(mut self, orientation: ScreenOrientation) -> Self {
        self.screen_orientation = orientation;
        self
    }

    /// Sets the rig geometry.
    #[must_use]
    pub fn with_rig(mut self, rig: RigOptions) -> Self {
        self.rig = rig;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.update_interval.is_finite() && self.update_interval > 0.0) {
            return Err(invalid(
                "update_interval",
                format!("{} must be a positive number of seconds", self.update_interval),
            ));
        }
        self.rig.validate()
    }

    /// Parses and validates options from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::info!("loaded headrig options from {}", path.display());
        Ok(options)
    }

    /// Writes options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json_string()?)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> HeadrigError {
    HeadrigError::InvalidOption { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_polled_revision() {
        let options = Options::default();
        assert_eq!(options.profile, MappingProfile::Nested);
        assert_eq!(options.delivery, DeliveryMode::Poll);
        assert_eq!(options.rig.pull_back, 3.0);
        assert_eq!(options.rig.fixed_fov_degrees, None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let earliest = Options::earliest();
        assert_eq!(earliest.profile, MappingProfile::Flat);
        assert_eq!(earliest.delivery, DeliveryMode::Push);
        assert_eq!(earliest.rig.fixed_fov_degrees, Some(45.0));
        assert_eq!(earliest.rig.pull_back, 0.0);

        let middle = Options::landscape_corrected();
        assert_eq!(middle.profile, MappingProfile::Nested);
        assert_eq!(middle.delivery, DeliveryMode::Push);
        assert_eq!(middle.rig.eye_offset, 0.5);
        assert_eq!(middle.rig.tilt_degrees, -90.0);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let options =
            Options::from_json_str(r#"{ "screen_orientation": "landscapeLeft" }"#).unwrap();
        assert_eq!(options.screen_orientation, ScreenOrientation::LandscapeLeft);
        assert_eq!(options.profile, MappingProfile::Nested);
        assert_eq!(options.rig.eye_offset, 0.5);
    }

    #[test]
    fn test_json_round_trip() {
        let options = Options::earliest().with_rig(RigOptions::earliest().with_eye_offset(0.25));
        let json = options.to_json_string().unwrap();
        let back = Options::from_json_str(&json).unwrap();
        assert_eq!(back.profile, MappingProfile::Flat);
        assert_eq!(back.rig.eye_offset, 0.25);
        assert_eq!(back.rig.fixed_fov_degrees, Some(45.0));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_interval = Options {
            update_interval: 0.0,
            ..Options::default()
        };
        assert!(matches!(
            bad_interval.validate(),
            Err(HeadrigError::InvalidOption {
                field: "update_interval",
                ..
            })
        ));

        let bad_fov = Options::default().with_rig(RigOptions::polled().with_fixed_fov(180.0));
        assert!(bad_fov.validate().is_err());

        let bad_offset = Options::default().with_rig(RigOptions::polled().with_eye_offset(-1.0));
        assert!(bad_offset.validate().is_err());

        let bad_pull_back = RigOptions::polled().with_pull_back(f32::NAN);
        assert!(bad_pull_back.validate().is_err());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            Options::from_json_str(r#"{ "update_interval": -1.0 }"#),
            Err(HeadrigError::InvalidOption { .. })
        ));
        assert!(matches!(
            Options::from_json_str("{"),
            Err(HeadrigError::Json(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("headrig-options-{}.json", std::process::id()));
        Options::landscape_corrected().save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.delivery, DeliveryMode::Push);
        assert_eq!(loaded.profile, MappingProfile::Nested);
        std::fs::remove_file(&path).unwrap();
    }
}
