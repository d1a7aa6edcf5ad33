//! Top-level facade crate for slowpoke.
//!
//! Re-exports the instrumentation core and the gateway library so users can
//! depend on a single crate.

pub mod core {
    pub use slowpoke_core::*;
}

pub mod gateway {
    pub use slowpoke_gateway::*;
}
