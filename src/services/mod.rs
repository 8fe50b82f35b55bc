//! Service layer for business logic
//!
//! This module provides business logic shared between the HTTP API and
//! the CLI.

mod resolve_service;
mod shortcut_service;
pub mod validation;

pub use resolve_service::ResolveService;
pub use shortcut_service::*;
