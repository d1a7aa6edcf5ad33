use std::fmt;

use axum::http::Method;

/// HTTP-style request verb a handler may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Head,
    Post,
    Delete,
    Patch,
    Put,
    Options,
}

impl Verb {
    /// Every verb the framework dispatches, in declaration order.
    pub const ALL: [Verb; 7] = [
        Verb::Get,
        Verb::Head,
        Verb::Post,
        Verb::Delete,
        Verb::Patch,
        Verb::Put,
        Verb::Options,
    ];

    /// Wire name (upper case).
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
            Verb::Patch => "PATCH",
            Verb::Put => "PUT",
            Verb::Options => "OPTIONS",
        }
    }

    /// Handler member name: the wire name in lower case.
    pub fn method_name(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Head => "head",
            Verb::Post => "post",
            Verb::Delete => "delete",
            Verb::Patch => "patch",
            Verb::Put => "put",
            Verb::Options => "options",
        }
    }

    pub fn parse(s: &str) -> Option<Verb> {
        Verb::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
    }

    pub fn from_method(method: &Method) -> Option<Verb> {
        Verb::parse(method.as_str())
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
