//! CLI command implementations

mod analyze;
mod generate;
mod presets;
mod validate;

pub use analyze::run_analyze;
pub use generate::{run_generate, GenerateOptions};
pub use presets::run_presets;
pub use validate::run_validate;
