//! CLI command modules for the valreg CLI.
//!
//! - `validate`: per-record validation of one network directory
//! - `generate`: aggregation of every record into the per-network artifact
//! - `net`: network catalogue (list, info)

pub mod generate;
pub mod net;
pub mod validate;
