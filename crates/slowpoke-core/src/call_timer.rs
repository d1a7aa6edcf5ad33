//! Wall-clock timing of synchronous calls.

use std::fmt::Debug;
use std::time::Instant;

use crate::site::CallSite;
use crate::slowlog::{self, SlowLogConfig};

/// Wraps a synchronous callable and reports invocations slower than the
/// configured threshold.
///
/// The wrapper holds no per-call state, so one instance may be shared across
/// threads and invoked concurrently. Arguments are passed by reference and are
/// only rendered when a call turns out to be slow.
#[derive(Clone)]
pub struct CallTimer<F> {
    site: CallSite,
    cfg: SlowLogConfig,
    f: F,
}

impl<F> CallTimer<F> {
    pub fn new(site: CallSite, f: F) -> Self {
        Self {
            site,
            cfg: SlowLogConfig::default(),
            f,
        }
    }

    pub fn with_config(mut self, cfg: SlowLogConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn site(&self) -> &CallSite {
        &self.site
    }

    /// Invoke the callable exactly once and return its result unchanged.
    ///
    /// A panic inside `f` unwinds through the wrapper and is never logged.
    pub fn call<A, R>(&self, args: &A) -> R
    where
        F: Fn(&A) -> R,
        A: Debug + ?Sized,
        R: Debug,
    {
        let start = Instant::now();
        let result = (self.f)(args);
        let elapsed = start.elapsed();

        if self.cfg.is_slow(elapsed) {
            slowlog::slow_call(&self.cfg, &self.site, elapsed, args, &result);
        }
        result
    }

    /// Like [`CallTimer::call`] for fallible callables.
    ///
    /// `Err` is handed back untouched and not logged, however long the call
    /// ran before failing.
    pub fn try_call<A, T, E>(&self, args: &A) -> Result<T, E>
    where
        F: Fn(&A) -> Result<T, E>,
        A: Debug + ?Sized,
        T: Debug,
    {
        let start = Instant::now();
        let value = (self.f)(args)?;
        let elapsed = start.elapsed();

        if self.cfg.is_slow(elapsed) {
            slowlog::slow_call(&self.cfg, &self.site, elapsed, args, &value);
        }
        Ok(value)
    }
}
