//! slowpoke gateway library entry.
//!
//! This crate is the hosting framework the instrumentation attaches to: verbs,
//! handlers and their per-request instances, timing attachment, the routine
//! scheduler and coroutine adapter, the route table, and the axum wiring. It
//! is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod coroutine;
pub mod dispatch;
pub mod handler;
pub mod http;
pub mod router;
pub mod services;
