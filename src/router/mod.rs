//! # Router Module
//!
//! Path matching and route resolution for trierouter.
//!
//! ## Overview
//!
//! Routes are `(verb, path, handler)` triples. Paths are split into
//! `/`-terminated segments that label the edges of a trie; each node owns a
//! fixed-size verb table. A segment equal to `*` is a wildcard that matches
//! any one non-empty segment and captures its text.
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Construction**: a [`Builder`] is populated with [`Builder::handle`] and
//!    [`Builder::handle_all`]. It is not `Sync`-safe to mutate concurrently and
//!    is meant for a single-threaded setup phase.
//!
//! 2. **Serving**: [`Builder::build`] moves the tree into an immutable
//!    [`Router`] and resets the builder. Lookups through [`Router::resolve`]
//!    take `&self` only and need no locking.
//!
//! ## Matching rules
//!
//! - Trailing slashes are significant: `/a` and `/a/` are distinct routes.
//! - At each segment the concrete child is tried before the wildcard.
//! - The wildcard is tried whenever the concrete branch fails to end on a
//!   routed node, so `/a/*` and `/a/b/c/*` coexist.
//! - Captures are reported root to leaf.
//!
//! ## Example
//!
//! ```
//! use trierouter::{Builder, RouteError, Verb};
//!
//! let mut builder = Builder::new();
//! builder.handle(Verb::Get, "/a", "exact");
//! builder.handle(Verb::Get, "/a/*", "child");
//! let router = builder.build();
//!
//! assert_eq!(*router.resolve("GET", "/a").unwrap().handler, "exact");
//! assert_eq!(*router.resolve("GET", "/a/b").unwrap().handler, "child");
//! assert!(matches!(
//!     router.resolve("POST", "/a"),
//!     Err(RouteError::VerbNotRegistered { .. })
//! ));
//! ```

mod core;
mod error;
mod trie;

pub use core::{Builder, RouteEntry, RouteMatch, Router};
pub use error::RouteError;
pub use trie::{Captures, MAX_INLINE_CAPTURES};
