//! Step-based verb-methods.
//!
//! The framework's native primitive is [`schedulable`]: it turns a routine
//! factory into a verb-method whose routine is driven by [`drive`], awaiting
//! every yielded [`Suspend`] and sending its output back in.
//!
//! Handlers declare step-based methods through [`coroutine`], which puts a
//! step timer *inside* the schedulable wrapper so the scheduler drives the
//! timed routine, never the bare one.

pub mod adapter;
pub mod scheduler;
pub mod suspend;

pub use adapter::{coroutine, coroutine_async, coroutine_with};
pub use scheduler::{drive, schedulable};
pub use suspend::Suspend;
