//! Valreg CLI library
//!
//! This module exposes the command implementations for testing.
//! The binary entry point is in main.rs.

pub mod cmds;
pub mod utils;
