//! gomarks - keyword shortcuts for the browser search bar
//!
//! Point the browser's search engine at `/go/?q=%s`. A query whose first word
//! matches a stored keyword redirects to that shortcut's destination, with the
//! remaining words substituted for `%s`. Anything else goes to a fallback
//! search engine.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line management interface
//!
//! # Architecture
//! - `resolver`: Query parsing and the resolution decision
//! - `storage`: Shortcut, settings and query log persistence
//! - `services`: Business logic shared by the HTTP API and the CLI
//! - `api`: HTTP services and middleware
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod resolver;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
