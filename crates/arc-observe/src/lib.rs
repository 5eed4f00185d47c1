//! Logging setup shared by the runner admission tools.
mod logger;
pub use logger::*;
