//! Library exports for rvpark-cli.
//!
//! The command structures are exposed so they can be exercised without
//! spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
