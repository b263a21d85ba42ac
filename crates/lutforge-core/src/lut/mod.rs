//! 3D LUT synthesis, serialization, and validation
//!
//! - `synthesis`: densifies a sparse [`ColorMapping`] into an N-cubed
//!   grid with exact-match short-circuit and nearest-neighbor fallback
//! - `format`: `.cube` and `.3dl` text serialization
//! - `validator`: re-parses either format and accumulates violations
//!
//! [`ColorMapping`]: crate::mapping::ColorMapping

mod format;
mod synthesis;
mod validator;


pub use format::{write_3dl, write_cube, LutFormat, MESH_MAX};
pub use synthesis::{synthesize_3dl, synthesize_cube, synthesize_grid};
pub use validator::{declared_size, validate_lut};
