//! Shared application state for the slowpoke gateway.
//!
//! Builds the application from config and registers the built-in handlers.
//! Timing attachment is chosen here, once, at registration time.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::dispatch::Application;
use crate::handler::Timed;
use crate::services::MainHandler;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    app: Arc<Application>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        let slowlog = cfg.instrument.slowlog();
        let attach_all = cfg.instrument.attach_all;

        let app = Application::builder()
            .slowlog(slowlog)
            .attach_all(attach_all)
            .build();

        // With application-wide attachment off, the demo opts in per handler.
        if attach_all {
            app.route("/", move |_ctx| MainHandler::new(slowlog));
        } else {
            app.route("/", move |_ctx| Timed::new(MainHandler::new(slowlog)));
        }

        tracing::info!(
            attach_all,
            threshold_ms = cfg.instrument.slow_threshold_ms,
            routes = ?app.registered_paths(),
            "application ready"
        );

        Self {
            inner: Arc::new(AppStateInner { cfg }),
            app: Arc::new(app),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn app(&self) -> Arc<Application> {
        Arc::clone(&self.app)
    }
}
