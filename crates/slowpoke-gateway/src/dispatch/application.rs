use std::sync::Arc;

use dashmap::DashMap;

use slowpoke_core::error::{Result, SlowpokeError};
use slowpoke_core::SlowLogConfig;

use crate::handler::{attach, ConstructHook, HandlerInstance, RequestHandler};
use crate::http::{RequestCtx, Response};

/// Builds a fresh handler for each request on a route.
pub type HandlerFactory = Arc<dyn Fn(&RequestCtx) -> Arc<dyn RequestHandler> + Send + Sync>;

/// Route table plus the construction hooks applied to every handler instance.
pub struct Application {
    routes: DashMap<String, HandlerFactory>,
    hooks: Vec<ConstructHook>,
    slowlog: SlowLogConfig,
}

#[derive(Default)]
pub struct ApplicationBuilder {
    hooks: Vec<ConstructHook>,
    slowlog: SlowLogConfig,
    attach_all: bool,
}

impl ApplicationBuilder {
    /// Threshold and render budget handed to every instance.
    pub fn slowlog(mut self, cfg: SlowLogConfig) -> Self {
        self.slowlog = cfg;
        self
    }

    /// Attach call timers to every handler instance this application builds.
    pub fn attach_all(mut self, enabled: bool) -> Self {
        self.attach_all = enabled;
        self
    }

    /// Extra construction hook.
    ///
    /// Hooks run in registration order, after the handler's own hook. With
    /// `attach_all`, attachment runs last, so plain methods bound by these
    /// hooks are timed too.
    pub fn on_construct<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut HandlerInstance) + Send + Sync + 'static,
    {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn build(self) -> Application {
        let mut hooks = self.hooks;
        if self.attach_all {
            hooks.push(Arc::new(attach));
        }
        Application {
            routes: DashMap::new(),
            hooks,
            slowlog: self.slowlog,
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::default()
    }

    pub fn slowlog(&self) -> SlowLogConfig {
        self.slowlog
    }

    /// Register `factory` for an exact path. Replaces any previous handler.
    pub fn route<H, F>(&self, path: &str, factory: F)
    where
        H: RequestHandler,
        F: Fn(&RequestCtx) -> H + Send + Sync + 'static,
    {
        let factory: HandlerFactory =
            Arc::new(move |ctx: &RequestCtx| -> Arc<dyn RequestHandler> { Arc::new(factory(ctx)) });
        self.routes.insert(path.to_string(), factory);
    }

    pub fn registered_paths(&self) -> Vec<String> {
        self.routes.iter().map(|e| e.key().clone()).collect()
    }

    /// Construct the handler instance for `ctx` without dispatching it.
    pub fn construct(&self, ctx: &RequestCtx) -> Result<HandlerInstance> {
        let factory = self
            .routes
            .get(ctx.path())
            .ok_or_else(|| SlowpokeError::NotFound(format!("no route for {}", ctx.path())))?
            .value()
            .clone();
        Ok(HandlerInstance::construct(factory(ctx), self.slowlog, &self.hooks))
    }

    /// Serve one request. Errors become responses carrying their status.
    pub async fn handle(&self, ctx: RequestCtx) -> Response {
        let verb = ctx.verb();
        let path = ctx.path().to_string();

        let served = match self.construct(&ctx) {
            Ok(instance) => instance.dispatch(ctx).await,
            Err(e) => Err(e),
        };

        match served {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(%verb, %path, code = e.client_code().as_str(), error = %e, "request failed");
                Response::from_error(&e)
            }
        }
    }
}
