//! Route table and per-request handler construction.
//!
//! Re-exports the application so downstream consumers can depend on this
//! module directly.

pub mod application;

pub use application::{Application, ApplicationBuilder, HandlerFactory};
