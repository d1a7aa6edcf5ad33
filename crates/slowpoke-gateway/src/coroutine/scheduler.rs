use std::future::Future;

use futures_util::FutureExt;

use slowpoke_core::error::Result;
use slowpoke_core::{CallSite, Routine, RoutineFactory, Step};

use crate::handler::VerbMethod;
use crate::http::{RequestCtx, Response};

/// Run `routine` to completion: start it, then keep awaiting what it yields
/// and sending the output back until it completes.
///
/// Dropping the returned future drops the routine with it.
pub async fn drive<R>(mut routine: R) -> R::Return
where
    R: Routine,
    R::Yield: Future<Output = R::Sent>,
{
    let mut step = routine.start();
    loop {
        match step {
            Step::Yielded(pending) => {
                let value = pending.await;
                step = routine.send(value);
            }
            Step::Complete(out) => return out,
        }
    }
}

/// Make a routine factory dispatchable: every request spawns a routine from the
/// request context and drives it on the runtime.
pub fn schedulable<F>(site: CallSite, factory: F) -> VerbMethod
where
    F: RoutineFactory<RequestCtx> + Send + Sync + 'static,
    F::Routine: Routine<Return = Result<Response>> + Send + 'static,
    <F::Routine as Routine>::Yield: Future<Output = <F::Routine as Routine>::Sent> + Send,
    <F::Routine as Routine>::Sent: Send,
{
    VerbMethod::coroutine(site, move |ctx| drive(factory.spawn(ctx)).boxed())
}
