#![allow(clippy::cast_precision_loss)]
//! Demo driving the stereo rig from a synthetic head movement.
//!
//! Replays one second of a slow look-around at 60 Hz, switching the screen
//! to landscape-left halfway through, and logs where each eye ends up.
//!
//! Run with: `RUST_LOG=info cargo run --example head_tracking_demo`
//! Pass a JSON options file as the first argument to override the defaults.

use std::f64::consts::PI;
use std::path::PathBuf;

use headrig::{
    init, AttitudeSample, DeliveryMode, Eye, FrameUpdate, HeadTracker, Result, ScreenOrientation,
    ScriptedMotionSource,
};

const FRAMES: u32 = 60;

fn main() -> Result<()> {
    let options_path = std::env::args().nth(1).map(PathBuf::from);
    let options = init(options_path.as_deref())?;

    let samples = (0..FRAMES)
        .map(|frame| {
            let t = f64::from(frame) / f64::from(FRAMES);
            AttitudeSample::new(0.1 * (2.0 * PI * t).sin(), -0.05 * t, PI * t)
                .with_timestamp(t)
        })
        .collect();

    let mut tracker = HeadTracker::new(ScriptedMotionSource::new(samples), &options)?;
    tracker.start();

    let mut frame = 0;
    while tracker.source().remaining() > 0 {
        // Polled trackers advance the script themselves on tick.
        if tracker.delivery() == DeliveryMode::Push {
            tracker.source_mut().advance();
        }
        if frame == FRAMES / 2 {
            tracker
                .source_mut()
                .set_orientation(Some(ScreenOrientation::LandscapeLeft));
        }

        let update = tracker.tick();
        if frame % 15 == 0 {
            let left = tracker.rig().eye_world_position(Eye::Left);
            let right = tracker.rig().eye_world_position(Eye::Right);
            match update {
                FrameUpdate::Nested(angles) => log::info!(
                    "frame {frame:2} [{}]: roll {:+.3} pitch {:+.3} yaw {:+.3}",
                    tracker.screen_orientation(),
                    angles.roll,
                    angles.pitch,
                    angles.yaw
                ),
                FrameUpdate::Flat(euler) => log::info!(
                    "frame {frame:2}: euler ({:+.3}, {:+.3}, {:+.3})",
                    euler.x,
                    euler.y,
                    euler.z
                ),
                FrameUpdate::Skipped => log::info!("frame {frame:2}: skipped"),
            }
            log::info!(
                "  left eye {left:?}, right eye {right:?}, forward {:?}",
                tracker.rig().forward()
            );
        }
        frame += 1;
    }

    tracker.stop();
    Ok(())
}
