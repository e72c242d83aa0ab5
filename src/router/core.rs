//! Router core module - registration and the lookup hot path.
//!
//! Lookups borrow captures from the request path and keep them in a
//! `SmallVec`, so resolving a route with up to eight wildcards performs no
//! heap allocation on success.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::error::RouteError;
use super::trie::{Captures, Node, Route};
use crate::config::RouterConfig;
use crate::verb::Verb;

/// Number of `VERB /pattern` lines included in the "routing table frozen" event.
const ROUTES_SUMMARY_LEN: usize = 10;

/// Strip the leading `/` from a registration path.
fn registration_path(path: &str) -> &str {
    match path.strip_prefix('/') {
        Some(rest) => rest,
        None => {
            warn!(path = %path, "Route path is not absolute, registering as-is");
            path
        }
    }
}

/// Mutable routing tree, populated during single-threaded setup.
///
/// Call [`Builder::build`] to freeze the tree into a [`Router`]. The builder
/// is left empty and can be reused to assemble an unrelated table.
///
/// ```
/// use trierouter::{Builder, Verb};
///
/// let mut builder = Builder::new();
/// builder.handle(Verb::Get, "/users/*", "get_user");
/// builder.handle(Verb::Delete, "/users/*", "delete_user");
/// let router = builder.build();
///
/// let m = router.resolve("GET", "/users/42").unwrap();
/// assert_eq!(*m.handler, "get_user");
/// assert_eq!(m.captures.as_slice(), ["42"]);
/// ```
pub struct Builder<H> {
    root: Node<H>,
    config: RouterConfig,
}

impl<H> Default for Builder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Builder<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Builder whose routers carry `config`.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            root: Node::default(),
            config,
        }
    }

    /// Register `handler` for `verb` at `path`.
    ///
    /// `path` must be absolute. Registering the same verb and path again
    /// replaces the earlier handler.
    pub fn handle(&mut self, verb: Verb, path: &str, handler: H) -> &mut Self {
        let replaced = self
            .root
            .place(registration_path(path))
            .set(verb, handler)
            .is_some();
        if replaced {
            debug!(verb = %verb, path = %path, "Replaced existing handler");
        } else {
            debug!(verb = %verb, path = %path, "Registered handler");
        }
        self
    }

    /// Register `handler` for every [`Verb`] at `path`.
    pub fn handle_all(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Clone,
    {
        let node = self.root.place(registration_path(path));
        for verb in Verb::ALL {
            if node.set(verb, handler.clone()).is_some() {
                debug!(verb = %verb, path = %path, "Replaced existing handler");
            }
        }
        debug!(path = %path, "Registered handler for all verbs");
        self
    }

    /// Freeze the current tree into a [`Router`] and reset this builder.
    pub fn build(&mut self) -> Router<H> {
        let router = Router {
            root: std::mem::take(&mut self.root),
            config: self.config,
        };

        let routes = router.routes();
        let routes_summary: Vec<String> = routes
            .iter()
            .take(ROUTES_SUMMARY_LEN)
            .map(|entry| format!("{} {}", entry.verb, entry.pattern))
            .collect();
        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Routing table frozen"
        );

        router
    }
}

/// A registered `(verb, pattern)` pair, as reported by [`Router::routes`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RouteEntry {
    /// Absolute path pattern, e.g. `/users/*/posts/`
    pub pattern: String,
    pub verb: Verb,
}

/// Successful resolution of a request.
#[derive(Debug)]
pub struct RouteMatch<'r, 'p, H> {
    pub verb: Verb,
    pub handler: &'r H,
    /// Wildcard captures in path order
    pub captures: Captures<'p>,
}

/// Frozen routing tree.
///
/// A router exposes no mutation, so it can be shared across threads (for
/// example behind an `Arc`) and queried concurrently without locking.
pub struct Router<H> {
    root: Node<H>,
    config: RouterConfig,
}

impl<H> Router<H> {
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Resolve a request method and path to a handler.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnrecognizedMethod`] if `method` is not a [`Verb`]
    /// - [`RouteError::NoRouteMatch`] if no routed node matches `path`
    /// - [`RouteError::VerbNotRegistered`] if the route has no handler for the verb
    pub fn resolve<'r, 'p>(
        &'r self,
        method: &str,
        path: &'p str,
    ) -> Result<RouteMatch<'r, 'p, H>, RouteError> {
        match Verb::parse(method) {
            Some(verb) => self.lookup(verb, path),
            None => {
                warn!(method = %method, path = %path, "Unrecognized method");
                Err(RouteError::UnrecognizedMethod {
                    method: method.to_owned(),
                })
            }
        }
    }

    /// Resolve an already-parsed verb and path to a handler.
    ///
    /// # Errors
    ///
    /// Same as [`Router::resolve`], minus the method check.
    pub fn lookup<'r, 'p>(
        &'r self,
        verb: Verb,
        path: &'p str,
    ) -> Result<RouteMatch<'r, 'p, H>, RouteError> {
        debug!(verb = %verb, path = %path, "Route match attempt");
        let match_start = Instant::now();

        let mut captures = Captures::new();
        let relative = path.strip_prefix('/').unwrap_or(path);
        let route = match self.root.find(relative, &mut captures).and_then(Node::route) {
            Some(route) => route,
            None => {
                warn!(verb = %verb, path = %path, "No route matched");
                return Err(RouteError::NoRouteMatch {
                    path: path.to_owned(),
                });
            }
        };

        let Some(handler) = route.get(verb) else {
            let allowed: Vec<Verb> = route.verbs().collect();
            warn!(verb = %verb, path = %path, allowed = ?allowed, "Method not allowed");
            return Err(RouteError::VerbNotRegistered {
                verb,
                path: path.to_owned(),
                allowed,
            });
        };

        let match_duration = match_start.elapsed();
        if match_duration > self.config.slow_match_threshold {
            warn!(
                verb = %verb,
                path = %path,
                captures = ?captures,
                duration_us = match_duration.as_micros(),
                "Slow route matching detected"
            );
        } else {
            debug!(
                verb = %verb,
                path = %path,
                captures = ?captures,
                duration_us = match_duration.as_micros(),
                "Route matched"
            );
        }

        Ok(RouteMatch {
            verb,
            handler,
            captures,
        })
    }

    /// Every registered `(verb, pattern)`, sorted by pattern then verb.
    #[must_use]
    pub fn routes(&self) -> Vec<RouteEntry> {
        let mut entries = Vec::new();
        let mut prefix = String::from("/");
        self.root
            .visit_routes(&mut prefix, &mut |pattern: &str, route: &Route<H>| {
                entries.extend(route.verbs().map(|verb| RouteEntry {
                    pattern: pattern.to_owned(),
                    verb,
                }));
            });
        entries.sort();
        entries
    }

    /// Number of populated verb slots across the whole tree.
    #[must_use]
    pub fn route_count(&self) -> usize {
        let mut count = 0;
        let mut prefix = String::new();
        self.root
            .visit_routes(&mut prefix, &mut |_: &str, route: &Route<H>| {
                count += route.verbs().count();
            });
        count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.route_count() == 0
    }
}
