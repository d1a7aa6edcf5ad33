use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::http::Verb;

/// Immutable view of one request. Cloning is cheap (shared).
#[derive(Clone)]
pub struct RequestCtx {
    inner: Arc<RequestParts>,
}

struct RequestParts {
    verb: Verb,
    path: String,
    query: Option<String>,
    body: Bytes,
}

impl RequestCtx {
    pub fn new(verb: Verb, path: impl Into<String>, query: Option<String>, body: Bytes) -> Self {
        Self {
            inner: Arc::new(RequestParts {
                verb,
                path: path.into(),
                query,
                body,
            }),
        }
    }

    pub fn verb(&self) -> Verb {
        self.inner.verb
    }

    pub fn path(&self) -> &str {
        &self.inner.path
    }

    pub fn query(&self) -> Option<&str> {
        self.inner.query.as_deref()
    }

    /// First value of `name` in the query string (no percent-decoding).
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query()?
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    pub fn body(&self) -> &Bytes {
        &self.inner.body
    }
}

// Body bytes stay out of diagnostics; only their length is shown.
impl fmt::Debug for RequestCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestCtx")
            .field("verb", &self.inner.verb)
            .field("path", &self.inner.path)
            .field("query", &self.inner.query)
            .field("body_len", &self.inner.body.len())
            .finish()
    }
}
