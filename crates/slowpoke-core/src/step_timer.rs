//! Per-resumption timing of step-based routines.
//!
//! Total routine duration says nothing useful: a routine may stay suspended
//! for minutes waiting on I/O. What matters is the work done between two
//! suspension points, so every resumption is timed on its own.

use std::fmt::Debug;
use std::time::Instant;

use crate::routine::{Routine, RoutineFactory, Step};
use crate::site::CallSite;
use crate::slowlog::{self, SlowLogConfig};

/// Routine factory whose routines time each resumption.
///
/// Takes the same arguments as the `Fn(&A) -> R` factory it wraps.
#[derive(Clone)]
pub struct StepTimer<F> {
    site: CallSite,
    cfg: SlowLogConfig,
    factory: F,
}

impl<F> StepTimer<F> {
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
}

impl<F, A, R> RoutineFactory<A> for StepTimer<F>
where
    F: Fn(&A) -> R,
{
    type Routine = TimedRoutine<R, A>;

    /// The wrapped routine keeps `args` for diagnostics; they are only
    /// rendered when a resumption is slow.
    fn spawn(&self, args: A) -> Self::Routine {
        TimedRoutine {
            inner: (self.factory)(&args),
            args,
            site: self.site,
            cfg: self.cfg,
            steps: 0,
        }
    }
}

/// A routine wrapped by [`StepTimer`].
///
/// Resumption values go in and yielded values come out untouched, one for one.
/// Only suspending resumptions are reported; the resumption that completes the
/// routine and any panic raised inside it pass through unlogged.
pub struct TimedRoutine<R, A> {
    inner: R,
    args: A,
    site: CallSite,
    cfg: SlowLogConfig,
    steps: u64,
}

impl<R, A> TimedRoutine<R, A> {
    /// Number of resumptions performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn timed(
        &mut self,
        resume: impl FnOnce(&mut R) -> Step<R::Yield, R::Return>,
    ) -> Step<R::Yield, R::Return>
    where
        R: Routine,
        R::Yield: Debug,
        A: Debug,
    {
        let step = self.steps;
        self.steps += 1;

        let start = Instant::now();
        let out = resume(&mut self.inner);
        let elapsed = start.elapsed();

        if let Step::Yielded(yielded) = &out {
            if self.cfg.is_slow(elapsed) {
                let line = self.inner.line().unwrap_or(self.site.line());
                slowlog::slow_step(
                    &self.cfg,
                    &self.site,
                    line,
                    step,
                    elapsed,
                    &self.args,
                    yielded,
                );
            }
        }
        out
    }
}

impl<R, A> Routine for TimedRoutine<R, A>
where
    R: Routine,
    R::Yield: Debug,
    A: Debug,
{
    type Sent = R::Sent;
    type Yield = R::Yield;
    type Return = R::Return;

    fn start(&mut self) -> Step<Self::Yield, Self::Return> {
        self.timed(|inner| inner.start())
    }

    fn send(&mut self, value: R::Sent) -> Step<Self::Yield, Self::Return> {
        self.timed(move |inner| inner.send(value))
    }

    fn line(&self) -> Option<u32> {
        self.inner.line()
    }
}
