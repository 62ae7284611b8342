//! Tracing bootstrap for the demo binary.

use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Arc;

use tracing::Level;

/// Initialize the global subscriber. Logs go to the file named by
/// `POPUP_WM_LOG` when set, otherwise to stderr (which the raw-mode screen
/// will clobber, hence the file escape hatch). Safe to call more than once;
/// later calls are no-ops.
pub fn init_default() {
    match log_file() {
        Some(file) => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_target(false)
                .with_writer(io::stderr)
                .try_init();
        }
    }
}

fn log_file() -> Option<File> {
    let path = std::env::var("POPUP_WM_LOG").ok()?;
    OpenOptions::new().create(true).append(true).open(path).ok()
}
