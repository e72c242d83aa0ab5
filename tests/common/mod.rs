#![allow(dead_code)]

use http::{Request, Response, StatusCode};
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;
use trierouter::{Builder, Handler, Router};

pub type Req = Request<()>;
pub type Res = Response<Vec<u8>>;
pub type HttpHandler = Handler<Req, Res>;

/// Records which tagged handlers ran and what they captured.
#[derive(Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Calls>>,
}

#[derive(Default)]
struct Calls {
    tags: BTreeSet<String>,
    captures: Vec<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records `tag` and its captures, writing no response.
    pub fn handler(&self, tag: &str) -> HttpHandler {
        let inner = Arc::clone(&self.inner);
        let tag = tag.to_string();
        handler(move |_res, _req, captures| {
            let mut calls = inner.lock();
            calls.tags.insert(tag.clone());
            calls
                .captures
                .push(captures.iter().map(|c| c.to_string()).collect());
        })
    }

    pub fn tagged_with(&self, tags: &[&str]) -> bool {
        let calls = self.inner.lock();
        calls.tags.len() == tags.len() && tags.iter().all(|t| calls.tags.contains(*t))
    }

    pub fn tags(&self) -> Vec<String> {
        self.inner.lock().tags.iter().cloned().collect()
    }

    pub fn last_captures(&self) -> Option<Vec<String>> {
        self.inner.lock().captures.last().cloned()
    }

    pub fn clear(&self) {
        let mut calls = self.inner.lock();
        calls.tags.clear();
        calls.captures.clear();
    }
}

/// Type-erase a closure into the handler type the tests register.
pub fn handler<F>(f: F) -> HttpHandler
where
    F: Fn(&mut Res, &Req, &[&str]) + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn new_builder() -> Builder<HttpHandler> {
    Builder::new()
}

/// Serve one request and return the full response.
pub fn dispatch(router: &Router<HttpHandler>, method: &str, path: &str) -> Res {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(())
        .expect("valid request");
    let mut res = Response::new(Vec::new());
    router.serve(&mut res, &req);
    res
}

/// Serve one request and return its status. Handlers that write nothing leave `200`.
pub fn status(router: &Router<HttpHandler>, method: &str, path: &str) -> StatusCode {
    dispatch(router, method, path).status()
}
