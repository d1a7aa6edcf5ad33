//! Per-poll timing of futures.
//!
//! A `poll` is the resumption of an `async` routine: the synchronous stretch of
//! work between two `.await` points. Timing each poll catches blocking calls
//! hidden inside async code, exactly like [`crate::StepTimer`] does for
//! explicit routines.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use crate::site::CallSite;
use crate::slowlog::{self, SlowLogConfig};

/// Future factory whose futures time each poll.
#[derive(Clone)]
pub struct PollTimer<F> {
    site: CallSite,
    cfg: SlowLogConfig,
    factory: F,
}

impl<F> PollTimer<F> {
    pub fn new(site: CallSite, factory: F) -> Self {
        Self {
            site,
            cfg: SlowLogConfig::default(),
            factory,
        }
    }

    pub fn with_config(mut self, cfg: SlowLogConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn site(&self) -> &CallSite {
        &self.site
    }

    pub fn spawn<A, Fut>(&self, args: A) -> TimedFuture<Fut, A>
    where
        F: Fn(&A) -> Fut,
        Fut: Future,
    {
        TimedFuture {
            fut: Box::pin((self.factory)(&args)),
            args,
            site: self.site,
            cfg: self.cfg,
            polls: 0,
        }
    }
}

/// A future wrapped by [`PollTimer`].
///
/// Slow polls that return `Pending` are reported; the poll that completes the
/// future is not, matching [`crate::TimedRoutine`].
pub struct TimedFuture<Fut, A> {
    fut: Pin<Box<Fut>>,
    args: A,
    site: CallSite,
    cfg: SlowLogConfig,
    polls: u64,
}

impl<Fut, A> TimedFuture<Fut, A> {
    /// Number of polls performed so far.
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl<Fut, A> Future for TimedFuture<Fut, A>
where
    Fut: Future,
    A: Debug + Unpin,
{
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let step = this.polls;
        this.polls += 1;

        let start = Instant::now();
        let out = this.fut.as_mut().poll(cx);
        let elapsed = start.elapsed();

        if out.is_pending() && this.cfg.is_slow(elapsed) {
            slowlog::slow_step(
                &this.cfg,
                &this.site,
                this.site.line(),
                step,
                elapsed,
                &this.args,
                &Poll::<()>::Pending,
            );
        }
        out
    }
}
