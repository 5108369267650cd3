//! Ctrl-C handling.
//!
//! The first interrupt sets a flag the provisioning run checks between
//! steps, so an upload in flight finishes before the run stops. A second
//! interrupt exits immediately.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// The process-wide interrupt flag.
pub fn interrupted() -> &'static AtomicBool {
    &INTERRUPTED
}

/// Install the Ctrl-C handler.
pub fn register() -> Result<()> {
    ctrlc::set_handler(|| {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            eprintln!("\ncancelled");
            std::process::exit(0);
        }
        eprintln!("\ninterrupt received, stopping after the current step (press Ctrl-C again to quit now)");
    })
    .map_err(|e| Error::Io(std::io::Error::other(format!("failed to register Ctrl-C handler: {e}"))))
}
