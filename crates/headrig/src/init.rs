//! Initialization helpers for headrig.
//!
//! headrig keeps no global state; these helpers set up logging and load the
//! options a [`HeadTracker`](crate::HeadTracker) is built from.

use std::path::Path;

use crate::{Options, Result};

/// Installs the `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; later calls are ignored. Set `RUST_LOG`
/// (e.g. `RUST_LOG=headrig=debug`) to see per-frame output.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Installs logging and loads options.
///
/// With no path, the defaults for a polled, landscape-corrected rig are used.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// values the rig cannot use.
///
/// # Example
///
/// ```no_run
/// use headrig::*;
///
/// fn main() -> Result<()> {
///     let options = init(Some("headrig.json".as_ref()))?;
///     let tracker = HeadTracker::new(PushMotionSource::new(), &options)?;
///     Ok(())
/// }
/// ```
pub fn init(options_path: Option<&Path>) -> Result<Options> {
    init_logging();
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    log::info!(
        "headrig initialized ({:?} mapping, {:?} delivery)",
        options.profile,
        options.delivery
    );
    Ok(options)
}
