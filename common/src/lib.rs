// Common library for shared code across the API server binaries

pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;
