//! Request/response types handed to handler verb-methods.
//!
//! These are deliberately small: handlers see the verb, path, query and body of
//! the request and build a buffered response.

pub mod request;
pub mod response;
pub mod verb;

pub use request::RequestCtx;
pub use response::Response;
pub use verb::Verb;
