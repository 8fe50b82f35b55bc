//! System-level modules
//!
//! Process-wide setup that runs once at startup, before any mode starts.

pub mod logging;

pub use logging::init_logging;
