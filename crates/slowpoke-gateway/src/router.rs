//! Axum router wiring (HTTP -> handler instances).
//!
//! Every path goes through the application route table, which answers 404
//! itself for unknown paths.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};

use slowpoke_core::SlowpokeError;

use crate::app_state::AppState;
use crate::http::{RequestCtx, Response, Verb};

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(serve).with_state(state)
}

async fn serve(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> axum::response::Response {
    let Some(verb) = Verb::from_method(&method) else {
        let err = SlowpokeError::MethodNotAllowed(format!("unsupported verb: {method}"));
        return into_http(Response::from_error(&err));
    };

    let ctx = RequestCtx::new(verb, uri.path(), uri.query().map(str::to_string), body);
    into_http(state.app().handle(ctx).await)
}

/// Convert a handler response into an axum response.
pub fn into_http(resp: Response) -> axum::response::Response {
    let status = StatusCode::from_u16(resp.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = resp.content_type();
    (status, [(header::CONTENT_TYPE, content_type)], resp.into_body()).into_response()
}
