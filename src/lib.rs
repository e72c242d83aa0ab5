//! # trierouter
//!
//! **trierouter** is a path-based HTTP request router built on a segment trie.
//! Given a set of `(verb, path pattern, handler)` registrations it resolves an
//! incoming method and path to exactly one handler, capturing the text of
//! any wildcard segments on the way.
//!
//! ## Overview
//!
//! - Literal segments and one wildcard form (`*`) per segment; no regexes,
//!   optional segments or query routing.
//! - Trailing slashes are significant: `/a` and `/a/` are different routes.
//! - Concrete segments win over wildcards, with fallback to the wildcard when
//!   the concrete branch does not lead to a route.
//! - A closed verb set (`DELETE GET HEAD OPTIONS PATCH POST PUT`) indexed into
//!   a fixed array on each node.
//!
//! ## Architecture
//!
//! - **[`router`]** - [`Builder`] (mutable, setup only) and [`Router`] (frozen, lock-free lookups)
//! - **[`dispatcher`]** - transport traits, [`Router::serve`], and [`SharedRouter`] for hot swaps
//! - **[`verb`]** - the closed [`Verb`] enumeration
//! - **[`config`]** - environment-driven [`RouterConfig`]
//! - **[`logging`]** - `tracing-subscriber` setup for binaries embedding the router
//!
//! ### Lifecycle
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Setup
//!     participant Builder
//!     participant Router
//!     participant Transport
//!     participant Handler
//!
//!     Setup->>Builder: handle(verb, path, handler)
//!     Setup->>Builder: handle_all(path, handler)
//!     Setup->>Builder: build()
//!     Builder-->>Setup: Router (builder reset to empty)
//!
//!     Transport->>Router: serve(res, req)
//!     Router->>Router: Verb::parse(method)
//!     alt unknown method
//!         Router-->>Transport: 405 Method Not Allowed
//!     end
//!     Router->>Router: walk trie, collect captures
//!     alt no routed node
//!         Router-->>Transport: 404 Not Found
//!     else verb slot empty
//!         Router-->>Transport: 405 + Allow
//!     else matched
//!         Router->>Handler: handler(res, req, captures)
//!     end
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use http::{Request, Response, StatusCode};
//! use trierouter::{Builder, Handler, Verb};
//!
//! let mut builder: Builder<Handler<Request<()>, Response<Vec<u8>>>> = Builder::new();
//! builder.handle_fn(Verb::Get, "/users/*/posts/*", |res, _req, captures| {
//!     let body = format!("user={} post={}", captures[0], captures[1]);
//!     res.body_mut().extend_from_slice(body.as_bytes());
//! });
//! let router = builder.build();
//!
//! let req = Request::get("/users/7/posts/99").body(()).unwrap();
//! let mut res = Response::new(Vec::new());
//! router.serve(&mut res, &req);
//! assert_eq!(res.body(), b"user=7 post=99");
//!
//! let req = Request::get("/users/7").body(()).unwrap();
//! let mut res = Response::new(Vec::new());
//! router.serve(&mut res, &req);
//! assert_eq!(res.status(), StatusCode::NOT_FOUND);
//! ```
//!
//! ## Concurrency
//!
//! [`Builder`] methods take `&mut self` and belong to a single-threaded setup
//! phase. [`Router`] has no mutating methods at all; once built it can be put
//! behind an `Arc` and queried from any number of threads. To change routes at
//! runtime, build a fresh router and swap it into a [`SharedRouter`].

pub mod config;
pub mod dispatcher;
pub mod logging;
pub mod router;
pub mod verb;

pub use config::RouterConfig;
pub use dispatcher::{Handler, RequestContext, ResponseSink, SharedRouter};
pub use router::{Builder, Captures, RouteEntry, RouteError, RouteMatch, Router};
pub use verb::Verb;
