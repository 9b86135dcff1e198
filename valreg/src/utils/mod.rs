//! Shared utilities for the valreg CLI.

pub mod logging;
pub mod output;

pub use output::{format_output, OutputFormat};
