//! Publish pipeline startup and exit reporting.
mod startup;

pub use startup::{run, RuntimeExit};
