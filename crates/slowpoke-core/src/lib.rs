//! slowpoke core: latency instrumentation for request handlers.
//!
//! This crate times synchronous calls ([`CallTimer`]), individual resumptions
//! of step-based routines ([`StepTimer`]) and individual polls of futures
//! ([`PollTimer`]). A call or resumption slower than the threshold (one second
//! by default) produces exactly one `ERROR` record on the `slowpoke::slow`
//! target. Wrapped code sees no other difference: arguments, results, sent and
//! yielded values, panics and errors all pass through untouched.
//!
//! It carries no runtime or transport dependencies so it can wrap any code.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod call_timer;
pub mod error;
pub mod poll_timer;
pub mod render;
pub mod routine;
pub mod site;
pub mod slowlog;
pub mod step_timer;

/// Shared result type.
pub use error::{Result, SlowpokeError};

pub use call_timer::CallTimer;
pub use poll_timer::{PollTimer, TimedFuture};
pub use render::Redacted;
pub use routine::{Routine, RoutineFactory, Step};
pub use site::CallSite;
pub use slowlog::{SlowLogConfig, SLOW_TARGET, SLOW_THRESHOLD};
pub use step_timer::{StepTimer, TimedRoutine};
