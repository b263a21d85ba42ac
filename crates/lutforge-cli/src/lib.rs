//! Shared utilities for lutforge-cli
//!
//! Decoding, argument parsing helpers, and the command implementations.
//! All file I/O lives in this crate; lutforge-core only ever sees
//! decoded pixel buffers and produces text.

pub mod commands;
pub mod parsers;
pub mod processing;

pub use parsers::parse_hex_color;
pub use processing::{decode_image, output_path, sanitize_file_stem};
