//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_management;
mod fallback;
mod history;
mod resolve;
mod shortcut_management;

pub use config_management::*;
pub use fallback::*;
pub use history::*;
pub use resolve::*;
pub use shortcut_management::*;
