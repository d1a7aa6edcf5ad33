use bytes::{Bytes, BytesMut};
use serde_json::json;

use slowpoke_core::SlowpokeError;

/// Buffered response built by a verb-method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    content_type: &'static str,
    body: BytesMut,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// Empty `200 OK` plain-text response.
    pub fn new() -> Self {
        Self {
            status: 200,
            content_type: "text/plain; charset=utf-8",
            body: BytesMut::new(),
        }
    }

    pub fn text(body: impl AsRef<[u8]>) -> Self {
        let mut out = Self::new();
        out.write(body);
        out
    }

    pub fn json(value: &serde_json::Value) -> Self {
        let mut out = Self::text(value.to_string());
        out.content_type = "application/json";
        out
    }

    /// Error body: `{"code": ..., "msg": ...}` with the code's status.
    pub fn from_error(err: &SlowpokeError) -> Self {
        let code = err.client_code();
        Self::json(&json!({
            "code": code.as_str(),
            "msg": err.to_string(),
        }))
        .with_status(code.http_status())
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Append a chunk to the body.
    pub fn write(&mut self, chunk: impl AsRef<[u8]>) {
        self.body.extend_from_slice(chunk.as_ref());
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body.freeze()
    }
}
