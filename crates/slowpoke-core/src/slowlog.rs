//! Slow-call threshold and the log records emitted on violation.
//!
//! Records go to the `slowpoke::slow` target at `ERROR`, the most severe level
//! `tracing` offers. The message text is the operator-facing contract:
//!
//! ```text
//! Slow function call took <seconds> seconds on <file> line <line> <name>(<args>) returned <result>
//! Slow generator function iteration took <seconds> seconds on <file> line <line> <name>(<args>) returned <result>
//! ```

use std::fmt::Debug;
use std::time::Duration;

use crate::render::{render, render_args};
use crate::site::CallSite;

/// Tracing target for every slow-call record.
pub const SLOW_TARGET: &str = "slowpoke::slow";

/// Calls and resumptions strictly longer than this are reported.
pub const SLOW_THRESHOLD: Duration = Duration::from_secs(1);

/// Default byte cap for each rendered argument list or result.
pub const MAX_RENDER_BYTES: usize = 256;

/// Threshold and rendering budget shared by all timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowLogConfig {
    pub threshold: Duration,
    pub max_render_bytes: usize,
}

impl Default for SlowLogConfig {
    fn default() -> Self {
        Self {
            threshold: SLOW_THRESHOLD,
            max_render_bytes: MAX_RENDER_BYTES,
        }
    }
}

impl SlowLogConfig {
    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_render_bytes(mut self, max_render_bytes: usize) -> Self {
        self.max_render_bytes = max_render_bytes;
        self
    }

    /// Strict comparison: exactly the threshold is not slow.
    pub fn is_slow(&self, elapsed: Duration) -> bool {
        elapsed > self.threshold
    }
}

pub(crate) fn slow_call<A: Debug + ?Sized>(
    cfg: &SlowLogConfig,
    site: &CallSite,
    elapsed: Duration,
    args: &A,
    result: &dyn Debug,
) {
    tracing::error!(
        target: SLOW_TARGET,
        "Slow function call took {:.6} seconds on {} line {} {}({}) returned {}",
        elapsed.as_secs_f64(),
        site.file(),
        site.line(),
        site.name(),
        render_args(args, cfg.max_render_bytes),
        render(result, cfg.max_render_bytes),
    );
}

pub(crate) fn slow_step<A: Debug + ?Sized>(
    cfg: &SlowLogConfig,
    site: &CallSite,
    line: u32,
    step: u64,
    elapsed: Duration,
    args: &A,
    yielded: &dyn Debug,
) {
    tracing::error!(
        target: SLOW_TARGET,
        step,
        "Slow generator function iteration took {:.6} seconds on {} line {} {}({}) returned {}",
        elapsed.as_secs_f64(),
        site.file(),
        line,
        site.name(),
        render_args(args, cfg.max_render_bytes),
        render(yielded, cfg.max_render_bytes),
    );
}
