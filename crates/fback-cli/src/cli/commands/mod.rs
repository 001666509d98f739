//! CLI command handlers. Each command is in its own file.

mod completions;
mod generate;

pub use completions::{run_completions, run_man};
pub use generate::run_generate;
