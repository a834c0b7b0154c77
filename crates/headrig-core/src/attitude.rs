//! Device attitude samples and screen orientation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HeadrigError;

/// A single instantaneous reading from the motion source.
///
/// Angles are in radians and are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttitudeSample {
    /// Rotation about the device's longitudinal axis.
    pub roll: f64,
    /// Rotation about the device's lateral axis.
    pub pitch: f64,
    /// Rotation about the device's vertical axis.
    pub yaw: f64,
    /// Sensor clock time in seconds, if the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

impl AttitudeSample {
    /// Creates a sample without a timestamp.
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            timestamp: None,
        }
    }

    /// Attaches a sensor timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Current device rotation relative to the application's reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScreenOrientation {
    /// Upright, home edge at the bottom.
    #[default]
    Portrait,
    /// Rotated so the top edge points left.
    LandscapeLeft,
    /// Rotated so the top edge points right.
    LandscapeRight,
    /// Upside down.
    PortraitUpsideDown,
}

impl ScreenOrientation {
    /// All orientations, in declaration order.
    pub const ALL: [ScreenOrientation; 4] = [
        ScreenOrientation::Portrait,
        ScreenOrientation::LandscapeLeft,
        ScreenOrientation::LandscapeRight,
        ScreenOrientation::PortraitUpsideDown,
    ];

    /// Returns the serialized name.
    pub fn name(self) -> &'static str {
        match self {
            ScreenOrientation::Portrait => "portrait",
            ScreenOrientation::LandscapeLeft => "landscapeLeft",
            ScreenOrientation::LandscapeRight => "landscapeRight",
            ScreenOrientation::PortraitUpsideDown => "portraitUpsideDown",
        }
    }

    /// Returns true for either landscape orientation.
    pub fn is_landscape(self) -> bool {
        matches!(
            self,
            ScreenOrientation::LandscapeLeft | ScreenOrientation::LandscapeRight
        )
    }
}

impl fmt::Display for ScreenOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenOrientation {
    type Err = HeadrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenOrientation::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HeadrigError::UnknownOrientation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_parse() {
        assert_eq!(
            "landscapeLeft".parse::<ScreenOrientation>().unwrap(),
            ScreenOrientation::LandscapeLeft
        );
        assert_eq!(
            " PORTRAIT ".parse::<ScreenOrientation>().unwrap(),
            ScreenOrientation::Portrait
        );
        assert!(matches!(
            "sideways".parse::<ScreenOrientation>(),
            Err(HeadrigError::UnknownOrientation(_))
        ));
    }

    #[test]
    fn test_orientation_serde_names() {
        let json = serde_json::to_string(&ScreenOrientation::PortraitUpsideDown).unwrap();
        assert_eq!(json, "\"portraitUpsideDown\"");
        let back: ScreenOrientation = serde_json::from_str("\"landscapeRight\"").unwrap();
        assert_eq!(back, ScreenOrientation::LandscapeRight);
    }

    #[test]
    fn test_display_matches_name() {
        for orientation in ScreenOrientation::ALL {
            assert_eq!(orientation.to_string(), orientation.name());
        }
    }

    #[test]
    fn test_sample_timestamp() {
        let sample = AttitudeSample::new(0.1, 0.2, 0.3);
        assert_eq!(sample.timestamp, None);
        assert_eq!(sample.with_timestamp(4.0).timestamp, Some(4.0));
    }
}
