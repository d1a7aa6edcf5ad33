use std::collections::HashMap;
use std::sync::Arc;

use slowpoke_core::error::{Result, SlowpokeError};
use slowpoke_core::SlowLogConfig;

use crate::handler::{RequestHandler, VerbMethod};
use crate::http::{RequestCtx, Response, Verb};

/// Application-level construction hook, run on every new instance.
pub type ConstructHook = Arc<dyn Fn(&mut HandlerInstance) + Send + Sync>;

/// Per-request handler instance: the bound method table.
pub struct HandlerInstance {
    name: &'static str,
    supported: &'static [Verb],
    methods: HashMap<Verb, VerbMethod>,
    slowlog: SlowLogConfig,
}

impl HandlerInstance {
    /// Bind the handler's methods, then run its own construction hook and the
    /// application hooks, in that order.
    pub fn construct(
        handler: Arc<dyn RequestHandler>,
        slowlog: SlowLogConfig,
        hooks: &[ConstructHook],
    ) -> Self {
        let supported = handler.supported_verbs();
        let methods = supported
            .iter()
            .filter_map(|&verb| Arc::clone(&handler).method(verb).map(|m| (verb, m)))
            .collect();

        let mut instance = Self {
            name: handler.name(),
            supported,
            methods,
            slowlog,
        };

        handler.on_construct(&mut instance);
        for hook in hooks {
            hook(&mut instance);
        }
        instance
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn supported_verbs(&self) -> &'static [Verb] {
        self.supported
    }

    pub fn method(&self, verb: Verb) -> Option<&VerbMethod> {
        self.methods.get(&verb)
    }

    /// Rebind the member for `verb` on this instance only.
    pub fn set_method(&mut self, verb: Verb, method: VerbMethod) {
        self.methods.insert(verb, method);
    }

    /// Threshold and render budget for timers attached to this instance.
    pub fn slowlog(&self) -> SlowLogConfig {
        self.slowlog
    }

    /// Run the verb-method selected by the request's verb.
    pub async fn dispatch(&self, ctx: RequestCtx) -> Result<Response> {
        let verb = ctx.verb();
        if !self.supported.contains(&verb) {
            return Err(SlowpokeError::MethodNotAllowed(format!(
                "{} does not support {verb}",
                self.name
            )));
        }

        let method = self.methods.get(&verb).ok_or_else(|| {
            SlowpokeError::MethodNotAllowed(format!(
                "{} has no {} method",
                self.name,
                verb.method_name()
            ))
        })?;
        method.invoke(ctx).await
    }
}
