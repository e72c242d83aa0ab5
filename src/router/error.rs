use http::StatusCode;
use std::fmt;

use crate::verb::Verb;

/// Why a request could not be resolved to a handler.
///
/// Every variant is a terminal, user-visible outcome. The dispatcher turns
/// it into a response via [`RouteError::status`]; it is never raised as a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The request method is outside the closed verb set.
    UnrecognizedMethod {
        /// The method string as received
        method: String,
    },
    /// No walk through the trie ends on a routed node.
    NoRouteMatch {
        /// The request path as received
        path: String,
    },
    /// The path resolved to a route, but nothing is registered for this verb.
    VerbNotRegistered {
        verb: Verb,
        path: String,
        /// Verbs that are registered on the resolved route, in table order
        allowed: Vec<Verb>,
    },
}

impl RouteError {
    /// HTTP status the dispatcher answers with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::NoRouteMatch { .. } => StatusCode::NOT_FOUND,
            RouteError::UnrecognizedMethod { .. } | RouteError::VerbNotRegistered { .. } => {
                StatusCode::METHOD_NOT_ALLOWED
            }
        }
    }

    /// Verbs to advertise in an `Allow` header. Empty unless a route was resolved.
    #[must_use]
    pub fn allowed(&self) -> &[Verb] {
        match self {
            RouteError::VerbNotRegistered { allowed, .. } => allowed,
            _ => &[],
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnrecognizedMethod { method } => {
                write!(f, "unrecognized HTTP method '{}'", method)
            }
            RouteError::NoRouteMatch { path } => write!(f, "no route matches '{}'", path),
            RouteError::VerbNotRegistered { verb, path, .. } => {
                write!(f, "no {} handler registered for '{}'", verb, path)
            }
        }
    }
}

impl std::error::Error for RouteError {}
