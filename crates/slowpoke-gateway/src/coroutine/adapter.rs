use std::fmt::Debug;
use std::future::Future;

use futures_util::FutureExt;

use slowpoke_core::error::Result;
use slowpoke_core::{CallSite, PollTimer, Routine, SlowLogConfig, StepTimer};

use crate::coroutine::scheduler::schedulable;
use crate::handler::VerbMethod;
use crate::http::{RequestCtx, Response};

/// Declare a step-based verb-method whose resumptions are timed against the
/// default one-second threshold.
pub fn coroutine<F, R>(site: CallSite, factory: F) -> VerbMethod
where
    F: Fn(&RequestCtx) -> R + Send + Sync + 'static,
    R: Routine<Return = Result<Response>> + Send + 'static,
    R::Yield: Future<Output = R::Sent> + Debug + Send,
    R::Sent: Send,
{
    coroutine_with(site, SlowLogConfig::default(), factory)
}

/// [`coroutine`] with an explicit threshold and render budget.
pub fn coroutine_with<F, R>(site: CallSite, cfg: SlowLogConfig, factory: F) -> VerbMethod
where
    F: Fn(&RequestCtx) -> R + Send + Sync + 'static,
    R: Routine<Return = Result<Response>> + Send + 'static,
    R::Yield: Future<Output = R::Sent> + Debug + Send,
    R::Sent: Send,
{
    // Timer first, then the scheduler wrapper around it.
    schedulable(site, StepTimer::new(site, factory).with_config(cfg))
}

/// Declare an `async` verb-method; each poll is timed as one resumption.
pub fn coroutine_async<F, Fut>(site: CallSite, cfg: SlowLogConfig, factory: F) -> VerbMethod
where
    F: Fn(&RequestCtx) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response>> + Send + 'static,
{
    let timer = PollTimer::new(site, factory).with_config(cfg);
    VerbMethod::coroutine(site, move |ctx| timer.spawn(ctx).boxed())
}
