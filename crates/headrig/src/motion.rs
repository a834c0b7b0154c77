//! Motion sources and the latest-sample register.
//!
//! Platforms deliver attitude either by pushing samples from a sensor
//! callback or by being polled once per rendered frame. Both end up in a
//! [`SampleRegister`]: a last-value-wins cell that the render step reads
//! synchronously.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use headrig_core::{AttitudeSample, HeadrigError, Result, ScreenOrientation};

/// Anything that can report device attitude.
pub trait MotionSource {
    /// Starts sample delivery.
    ///
    /// Returns [`HeadrigError::MotionUnavailable`] when the sensor is missing
    /// or access was denied.
    fn start(&mut self) -> Result<()>;

    /// Stops sample delivery.
    fn stop(&mut self);

    /// Whether delivery is running.
    fn is_active(&self) -> bool;

    /// Latest sample, or `None` if nothing has been delivered.
    fn latest(&self) -> Option<AttitudeSample>;

    /// Asks the sensor for a fresh reading.
    ///
    /// Called once per frame by trackers using poll delivery. Sources that
    /// only receive pushed samples keep the default no-op.
    fn poll(&mut self) {}

    /// Current screen orientation, if the source knows it.
    fn screen_orientation(&self) -> Option<ScreenOrientation> {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct RegisterState {
    sample: Option<AttitudeSample>,
    orientation: Option<ScreenOrientation>,
}

/// Thread-safe cell holding the most recent sample and orientation.
///
/// Clones share the same cell.
#[derive(Debug, Default, Clone)]
pub struct SampleRegister {
    state: Arc<RwLock<RegisterState>>,
}

impl SampleRegister {
    /// Creates an empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored sample.
    pub fn publish(&self, sample: AttitudeSample) {
        self.write(|state| state.sample = Some(sample));
    }

    /// Replaces the stored orientation.
    pub fn publish_orientation(&self, orientation: ScreenOrientation) {
        self.write(|state| state.orientation = Some(orientation));
    }

    /// The most recently published sample.
    pub fn latest(&self) -> Option<AttitudeSample> {
        self.read().sample
    }

    /// The most recently published orientation.
    pub fn orientation(&self) -> Option<ScreenOrientation> {
        self.read().orientation
    }

    /// Forgets the stored sample, keeping the orientation.
    pub fn clear_sample(&self) {
        self.write(|state| state.sample = None);
    }

    /// Forgets the stored sample and orientation.
    pub fn clear(&self) {
        self.write(|state| *state = RegisterState::default());
    }

    // The state is plain Copy data, so a poisoned lock still holds a usable value.
    fn read(&self) -> RegisterState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, f: impl FnOnce(&mut RegisterState)) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}

/// Handle given to a platform callback to push samples.
///
/// Publishing samples and orientation changes is ignored while the owning
/// source is stopped.
#[derive(Debug, Clone)]
pub struct MotionPublisher {
    register: SampleRegister,
    active: Arc<AtomicBool>,
}

impl MotionPublisher {
    /// Publishes a sample. Returns false if the source is stopped.
    pub fn publish(&self, sample: AttitudeSample) -> bool {
        if !self.active.load(Ordering::Acquire) {
            return false;
        }
        self.register.publish(sample);
        true
    }

    /// Publishes a screen orientation change. Returns false if the source is stopped.
    pub fn publish_orientation(&self, orientation: ScreenOrientation) -> bool {
        if !self.active.load(Ordering::Acquire) {
            return false;
        }
        self.register.publish_orientation(orientation);
        true
    }
}

/// A source fed by pushed samples.
#[derive(Debug, Default)]
pub struct PushMotionSource {
    register: SampleRegister,
    active: Arc<AtomicBool>,
}

impl PushMotionSource {
    /// Creates a stopped source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle for the platform callback.
    pub fn publisher(&self) -> MotionPublisher {
        MotionPublisher {
            register: self.register.clone(),
            active: Arc::clone(&self.active),
        }
    }

    /// The backing register.
    pub fn register(&self) -> &SampleRegister {
        &self.register
    }
}

impl MotionSource for PushMotionSource {
    fn start(&mut self) -> Result<()> {
        self.active.store(true, Ordering::Release);
        Ok(())
    }

    // A sample from before the pause must not be replayed after a restart.
    fn stop(&mut self) {
        self.active.store(false, Ordering::Release);
        self.register.clear_sample();
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    fn latest(&self) -> Option<AttitudeSample> {
        if self.is_active() {
            self.register.latest()
        } else {
            None
        }
    }

    fn screen_orientation(&self) -> Option<ScreenOrientation> {
        self.register.orientation()
    }
}

/// A source that replays a fixed list of samples.
///
/// Nothing is reported until the first [`advance`](Self::advance).
#[derive(Debug, Clone, Default)]
pub struct ScriptedMotionSource {
    samples: Vec<AttitudeSample>,
    cursor: Option<usize>,
    active: bool,
    unavailable: Option<String>,
    orientation: Option<ScreenOrientation>,
}

impl ScriptedMotionSource {
    /// Creates a source that will replay `samples` in order.
    pub fn new(samples: Vec<AttitudeSample>) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    /// Creates a source whose `start` always fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Reports `orientation` alongside every sample.
    #[must_use]
    pub fn with_orientation(mut self, orientation: ScreenOrientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Changes the reported orientation.
    pub fn set_orientation(&mut self, orientation: Option<ScreenOrientation>) {
        self.orientation = orientation;
    }

    /// Moves to the next sample. Returns false once the script is exhausted;
    /// the last sample keeps being reported.
    pub fn advance(&mut self) -> bool {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next < self.samples.len() {
            self.cursor = Some(next);
            true
        } else {
            false
        }
    }

    /// Number of samples left to deliver.
    pub fn remaining(&self) -> usize {
        let delivered = self.cursor.map_or(0, |i| i + 1);
        self.samples.len() - delivered
    }
}

impl MotionSource for ScriptedMotionSource {
    fn start(&mut self) -> Result<()> {
        if let Some(reason) = &self.unavailable {
            return Err(HeadrigError::MotionUnavailable(reason.clone()));
        }
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn latest(&self) -> Option<AttitudeSample> {
        if !self.active {
            return None;
        }
        self.cursor.and_then(|i| self.samples.get(i).copied())
    }

    fn poll(&mut self) {
        self.advance();
    }

    fn screen_orientation(&self) -> Option<ScreenOrientation> {
        self.orientation
    }
}
