//! # Verb Module
//!
//! The closed set of HTTP methods the router can register handlers for.
//!
//! Each [`Verb`] doubles as an index into a route's fixed-size handler table,
//! so a verb lookup is a single array access. Methods outside the set (for
//! example `TRACE` or `CONNECT`) have no `Verb`; [`Verb::parse`] returns
//! `None` for them and the dispatcher answers `405 Method Not Allowed`.

use http::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs a handler can be registered for.
///
/// The discriminants are contiguous from zero and are used directly as
/// verb-table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Delete = 0,
    Get = 1,
    Head = 2,
    Options = 3,
    Patch = 4,
    Post = 5,
    Put = 6,
}

impl Verb {
    /// Number of verbs, and the length of every verb table.
    pub const COUNT: usize = 7;

    /// Every verb, in table order.
    pub const ALL: [Verb; Verb::COUNT] = [
        Verb::Delete,
        Verb::Get,
        Verb::Head,
        Verb::Options,
        Verb::Patch,
        Verb::Post,
        Verb::Put,
    ];

    /// Position of this verb in a verb table.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verb::Delete => "DELETE",
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
            Verb::Patch => "PATCH",
            Verb::Post => "POST",
            Verb::Put => "PUT",
        }
    }

    /// Resolve a request method string.
    ///
    /// Matching is exact and case-sensitive, as HTTP method tokens are.
    #[inline]
    #[must_use]
    pub fn parse(method: &str) -> Option<Verb> {
        match method {
            "DELETE" => Some(Verb::Delete),
            "GET" => Some(Verb::Get),
            "HEAD" => Some(Verb::Head),
            "OPTIONS" => Some(Verb::Options),
            "PATCH" => Some(Verb::Patch),
            "POST" => Some(Verb::Post),
            "PUT" => Some(Verb::Put),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_method(method: &Method) -> Option<Verb> {
        Verb::parse(method.as_str())
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a method string outside the verb set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl fmt::Display for UnknownVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized HTTP method '{}'", self.0)
    }
}

impl std::error::Error for UnknownVerb {}

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::parse(s).ok_or_else(|| UnknownVerb(s.to_string()))
    }
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Method {
        match verb {
            Verb::Delete => Method::DELETE,
            Verb::Get => Method::GET,
            Verb::Head => Method::HEAD,
            Verb::Options => Method::OPTIONS,
            Verb::Patch => Method::PATCH,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
        }
    }
}
