//! Timing attachment for synchronous verb-methods.
//!
//! Two ways in, same behavior:
//! - [`Timed`] wraps one handler type; its construction hook attaches.
//! - `Application::builder().attach_all(true)` registers [`attach`] as an
//!   application-wide construction hook for every handler.
//!
//! Step-based methods are left alone: they are expected to be declared through
//! the coroutine adapter, which times each resumption instead.

use std::sync::Arc;

use slowpoke_core::CallTimer;

use crate::handler::{HandlerInstance, PlainFn, RequestHandler, TimedFn, VerbMethod};
use crate::http::{RequestCtx, Verb};

/// Wrap every plain verb-method of `instance` in a call timer.
///
/// Already-timed and step-based methods are skipped, so calling it again (or
/// enabling both attachment modes) never double-wraps, while a plain method
/// rebound by a later hook still gets its timer.
pub fn attach(instance: &mut HandlerInstance) {
    let cfg = instance.slowlog();
    for &verb in instance.supported_verbs() {
        let member = verb.method_name();
        let Some(method) = instance.method(verb).cloned() else {
            continue;
        };

        match method {
            VerbMethod::Plain { site, f } => {
                let timer = CallTimer::new(site, move |ctx: &RequestCtx| f(ctx)).with_config(cfg);
                let timed: PlainFn = Arc::new(move |ctx: &RequestCtx| timer.try_call(ctx));
                instance.set_method(
                    verb,
                    VerbMethod::Timed {
                        site,
                        f: TimedFn::new(timed),
                    },
                );
                tracing::debug!(handler = instance.name(), member, "call timer attached");
            }
            VerbMethod::Timed { .. } | VerbMethod::Coroutine { .. } => {}
        }
    }
}

/// Handler wrapper that attaches call timers when an instance is constructed.
pub struct Timed<H> {
    inner: Arc<H>,
}

impl<H: RequestHandler> Timed<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<H: RequestHandler> RequestHandler for Timed<H> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn supported_verbs(&self) -> &'static [Verb] {
        self.inner.supported_verbs()
    }

    fn method(self: Arc<Self>, verb: Verb) -> Option<VerbMethod> {
        Arc::clone(&self.inner).method(verb)
    }

    fn on_construct(&self, instance: &mut HandlerInstance) {
        self.inner.on_construct(instance);
        attach(instance);
    }
}
