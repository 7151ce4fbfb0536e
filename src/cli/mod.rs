//! Command-line surface: argument parsing and plain-text rendering.

mod commands;
mod display;

pub use commands::{Cli, Commands};
pub use display::{render_jobs, render_market, render_skills};
