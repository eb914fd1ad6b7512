//! Library crate root re-exporting the CLI, configuration, and publish modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod publish;
pub mod runtime;
