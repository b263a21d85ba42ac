//! Engine configuration and logging control.
//!
//! Provides the global verbose flag used by `verbose_println!` and
//! engine-wide constants shared between analysis and synthesis.

use std::sync::atomic::{AtomicBool, Ordering};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Default cubic grid dimension for synthesized LUTs.
pub const DEFAULT_LUT_SIZE: usize = 32;

/// Upper bound on pixels inspected per analysis, regardless of image size.
pub const MAX_SAMPLED_PIXELS: usize = 10_000;

/// Pixels with alpha below this value are excluded from analysis.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Number of dominant colors retained from the histogram.
pub const MAX_DOMINANT_COLORS: usize = 10;
