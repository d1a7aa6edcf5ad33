//! Request handlers and their verb-methods.
//!
//! A handler type declares, per [`Verb`], an optional [`VerbMethod`]. Each
//! request gets a fresh [`HandlerInstance`] holding the bound methods; the
//! instance is what timing attachment rebinds, so wrapping one instance never
//! touches another.
//!
//! Whether a method is step-based is stated by its [`VerbMethod`] variant at
//! declaration time. Nothing is inspected at runtime.

pub mod attach;
pub mod instance;

use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use slowpoke_core::error::Result;
use slowpoke_core::CallSite;

use crate::http::{RequestCtx, Response, Verb};

pub use attach::{attach, Timed};
pub use instance::{ConstructHook, HandlerInstance};

/// Synchronous verb-method body.
pub type PlainFn = Arc<dyn Fn(&RequestCtx) -> Result<Response> + Send + Sync>;

/// Schedulable verb-method body: one future per request.
pub type CoroutineFn = Arc<dyn Fn(RequestCtx) -> BoxFuture<'static, Result<Response>> + Send + Sync>;

/// Synchronous body wrapped by a call timer.
///
/// Only [`attach`] builds one, so a `Timed` method is always really timed:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use slowpoke_gateway::handler::{PlainFn, TimedFn};
/// use slowpoke_gateway::http::{RequestCtx, Response};
///
/// let f: PlainFn = Arc::new(|_ctx: &RequestCtx| Ok(Response::new()));
/// let _ = TimedFn(f);
/// ```
#[derive(Clone)]
pub struct TimedFn(PlainFn);

impl TimedFn {
    pub(crate) fn new(f: PlainFn) -> Self {
        Self(f)
    }

    pub fn as_fn(&self) -> &PlainFn {
        &self.0
    }
}

/// A bound verb-method, tagged with how it runs.
#[derive(Clone)]
pub enum VerbMethod {
    /// Ordinary synchronous method.
    Plain { site: CallSite, f: PlainFn },
    /// Synchronous method already wrapped by a call timer.
    Timed { site: CallSite, f: TimedFn },
    /// Step-based method, already made schedulable.
    Coroutine { site: CallSite, f: CoroutineFn },
}

impl VerbMethod {
    pub fn plain<F>(site: CallSite, f: F) -> Self
    where
        F: Fn(&RequestCtx) -> Result<Response> + Send + Sync + 'static,
    {
        VerbMethod::Plain {
            site,
            f: Arc::new(f),
        }
    }

    pub fn coroutine<F>(site: CallSite, f: F) -> Self
    where
        F: Fn(RequestCtx) -> BoxFuture<'static, Result<Response>> + Send + Sync + 'static,
    {
        VerbMethod::Coroutine {
            site,
            f: Arc::new(f),
        }
    }

    pub fn site(&self) -> &CallSite {
        match self {
            VerbMethod::Plain { site, .. }
            | VerbMethod::Timed { site, .. }
            | VerbMethod::Coroutine { site, .. } => site,
        }
    }

    pub fn is_step_based(&self) -> bool {
        matches!(self, VerbMethod::Coroutine { .. })
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, VerbMethod::Timed { .. })
    }

    /// Run the method for one request.
    pub fn invoke(&self, ctx: RequestCtx) -> BoxFuture<'static, Result<Response>> {
        match self {
            VerbMethod::Plain { f, .. } => futures_util::future::ready(f(&ctx)).boxed(),
            VerbMethod::Timed { f, .. } => futures_util::future::ready((f.0)(&ctx)).boxed(),
            VerbMethod::Coroutine { f, .. } => f(ctx),
        }
    }
}

impl fmt::Debug for VerbMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            VerbMethod::Plain { .. } => "Plain",
            VerbMethod::Timed { .. } => "Timed",
            VerbMethod::Coroutine { .. } => "Coroutine",
        };
        f.debug_struct("VerbMethod")
            .field("kind", &kind)
            .field("site", self.site())
            .finish()
    }
}

/// A request handler type.
///
/// Implementors return a bound method for each verb they implement. The
/// framework builds one instance per request and calls
/// [`RequestHandler::on_construct`] on it exactly once, before dispatch.
pub trait RequestHandler: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// Verbs this handler type may be dispatched with.
    fn supported_verbs(&self) -> &'static [Verb] {
        &Verb::ALL
    }

    /// Bound implementation of `verb`, if the handler has one.
    fn method(self: Arc<Self>, verb: Verb) -> Option<VerbMethod>;

    /// Construction hook: runs after the method table is bound.
    fn on_construct(&self, _instance: &mut HandlerInstance) {}
}
