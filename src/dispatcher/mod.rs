//! # Dispatcher Module
//!
//! Adapts a transport-level request to a router lookup and handler call.
//!
//! ## Overview
//!
//! The transport is abstracted by two small traits:
//!
//! - [`RequestContext`] exposes the method and path of an inbound request
//! - [`ResponseSink`] accepts a status code, headers, and body bytes
//!
//! Both are implemented for the [`http`] crate's `Request<B>` and
//! `Response<Vec<u8>>`, so any server that speaks `http` types can feed
//! requests straight into [`Router::serve`](crate::router::Router).
//!
//! ## Request Flow
//!
//! 1. The method string is resolved to a [`Verb`](crate::verb::Verb);
//!    unknown methods get `405 Method Not Allowed`.
//! 2. The path is walked through the frozen trie.
//! 3. No routed node → `404 Not Found`. A routed node without a handler for
//!    the verb → `405` with an `Allow` header.
//! 4. Otherwise the handler runs with the wildcard captures; the dispatcher
//!    writes nothing else.
//!
//! ## Example
//!
//! ```
//! use http::{Request, Response, StatusCode};
//! use trierouter::{Builder, Handler, Verb};
//!
//! type Req = Request<()>;
//! type Res = Response<Vec<u8>>;
//!
//! let mut builder: Builder<Handler<Req, Res>> = Builder::new();
//! builder.handle_fn(Verb::Get, "/hello/*", |res, _req, captures| {
//!     res.body_mut().extend_from_slice(captures[0].as_bytes());
//! });
//! let router = builder.build();
//!
//! let req = Request::get("/hello/world").body(()).unwrap();
//! let mut res = Response::new(Vec::new());
//! router.serve(&mut res, &req);
//! assert_eq!(res.status(), StatusCode::OK);
//! assert_eq!(res.body(), b"world");
//! ```

mod core;
mod shared;

pub use core::{write_error, write_route_error, Handler, RequestContext, ResponseSink};
pub use shared::SharedRouter;
