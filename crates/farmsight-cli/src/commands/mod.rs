//! Subcommand implementations.

pub mod analysis;
pub mod control;
pub mod forecast;
pub mod market;
pub mod sensors;
pub mod watch;
