//! Per-frame head tracking.

use headrig_camera::CameraRig;
use headrig_core::{
    compute_flat_euler, compute_rig_angles, CameraRigAngles, DeliveryMode, FlatRigEuler,
    MappingProfile, Options, Result, ScreenOrientation,
};

use crate::motion::MotionSource;

/// What a call to [`HeadTracker::tick`] did to the rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameUpdate {
    /// Nested node angles were assigned.
    Nested(CameraRigAngles),
    /// Mount Euler angles were assigned.
    Flat(FlatRigEuler),
    /// No sample was available; the rig kept its last angles.
    Skipped,
}

impl FrameUpdate {
    /// Whether the rig was updated.
    pub fn is_applied(&self) -> bool {
        !matches!(self, FrameUpdate::Skipped)
    }
}

/// Drives a [`CameraRig`] from a [`MotionSource`], once per frame.
pub struct HeadTracker<S> {
    source: S,
    rig: CameraRig,
    profile: MappingProfile,
    delivery: DeliveryMode,
    orientation: ScreenOrientation,
    frames_applied: u64,
    frames_skipped: u64,
}

impl<S: MotionSource> HeadTracker<S> {
    /// Creates a tracker and builds its rig from `options`.
    pub fn new(source: S, options: &Options) -> Result<Self> {
        options.validate()?;
        log::debug!(
            "head tracker: {:?} mapping, {:?} delivery every {:.4}s",
            options.profile,
            options.delivery,
            options.update_interval
        );
        Ok(Self {
            source,
            rig: CameraRig::new(&options.rig),
            profile: options.profile,
            delivery: options.delivery,
            orientation: options.screen_orientation,
            frames_applied: 0,
            frames_skipped: 0,
        })
    }

    /// Starts the motion source.
    ///
    /// A source that fails to start leaves the tracker degraded: every tick
    /// is skipped and the rig stays where it is. Returns whether tracking is
    /// running.
    pub fn start(&mut self) -> bool {
        match self.source.start() {
            Ok(()) => {
                log::info!("head tracking started");
                true
            }
            Err(err) => {
                log::warn!("head tracking disabled, rig will hold its orientation: {err}");
                false
            }
        }
    }

    /// Stops the motion source.
    pub fn stop(&mut self) {
        self.source.stop();
        log::info!(
            "head tracking stopped after {} applied and {} skipped frames",
            self.frames_applied,
            self.frames_skipped
        );
    }

    /// Reads the latest sample and updates the rig.
    ///
    /// With [`DeliveryMode::Poll`] the source is polled first; with
    /// [`DeliveryMode::Push`] only what has already been delivered is read.
    pub fn tick(&mut self) -> FrameUpdate {
        if self.delivery == DeliveryMode::Poll {
            self.source.poll();
        }
        if let Some(orientation) = self.source.screen_orientation() {
            self.orientation = orientation;
        }

        let Some(sample) = self.source.latest() else {
            self.frames_skipped += 1;
            return FrameUpdate::Skipped;
        };

        self.frames_applied += 1;
        match self.profile {
            MappingProfile::Nested => {
                let angles = compute_rig_angles(&sample, self.orientation);
                self.rig.apply_angles(angles);
                log::trace!("rig angles {angles:?} ({})", self.orientation);
                FrameUpdate::Nested(angles)
            }
            MappingProfile::Flat => {
                let euler = compute_flat_euler(&sample, self.rig.tilt());
                self.rig.apply_flat(euler);
                log::trace!("rig euler {euler:?}");
                FrameUpdate::Flat(euler)
            }
        }
    }

    /// Orientation used for the next tick unless the source reports one.
    pub fn set_screen_orientation(&mut self, orientation: ScreenOrientation) {
        self.orientation = orientation;
    }

    /// Orientation used by the most recent tick.
    pub fn screen_orientation(&self) -> ScreenOrientation {
        self.orientation
    }

    /// The delivery mode.
    pub fn delivery(&self) -> DeliveryMode {
        self.delivery
    }

    /// The mapping profile.
    pub fn profile(&self) -> MappingProfile {
        self.profile
    }

    /// The camera rig.
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable access to the camera rig.
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// The motion source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the motion source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Number of ticks that updated the rig.
    pub fn frames_applied(&self) -> u64 {
        self.frames_applied
    }

    /// Number of ticks skipped for lack of a sample.
    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}
