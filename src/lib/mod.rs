//! Shared library modules providing error types, the secret buffer, command building, and telemetry initialization.

pub mod dotnet;
pub mod errors;
pub mod secret;
pub mod telemetry;
