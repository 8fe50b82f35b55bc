//! HTTP surface: redirect endpoint, JSON admin API, health probes and middleware

pub mod middleware;
pub mod services;
