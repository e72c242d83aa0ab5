//! Dispatcher core module - bridges transport requests to handlers.

use http::header::{HeaderName, HeaderValue, ALLOW, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{Request, Response, StatusCode};
use std::sync::Arc;

use crate::router::{Builder, RouteError, Router};
use crate::verb::Verb;

/// The parts of an inbound request the router reads.
pub trait RequestContext {
    /// Request method token, e.g. `GET`
    fn method_name(&self) -> &str;
    /// Absolute request path, without query string
    fn request_path(&self) -> &str;
}

/// Where handlers and the dispatcher write their response.
pub trait ResponseSink {
    fn write_status(&mut self, status: StatusCode);

    /// Set a response header. Sinks without header support may ignore it.
    fn write_header(&mut self, _name: HeaderName, _value: HeaderValue) {}

    /// Append bytes to the response body.
    fn write_body(&mut self, body: &[u8]);
}

impl<B> RequestContext for Request<B> {
    fn method_name(&self) -> &str {
        Request::method(self).as_str()
    }

    fn request_path(&self) -> &str {
        self.uri().path()
    }
}

impl ResponseSink for Response<Vec<u8>> {
    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body_mut().extend_from_slice(body);
    }
}

/// Request handler: receives the response sink, the request, and the
/// wildcard captures in path order. It is solely responsible for the
/// response on success; nothing is written on its behalf.
pub type Handler<Req, Res> = Arc<dyn Fn(&mut Res, &Req, &[&str]) + Send + Sync>;

impl<Req, Res> Builder<Handler<Req, Res>> {
    /// [`Builder::handle`] for a plain closure.
    pub fn handle_fn<F>(&mut self, verb: Verb, path: &str, f: F) -> &mut Self
    where
        F: Fn(&mut Res, &Req, &[&str]) + Send + Sync + 'static,
    {
        self.handle(verb, path, Arc::new(f))
    }

    /// [`Builder::handle_all`] for a plain closure.
    pub fn handle_all_fn<F>(&mut self, path: &str, f: F) -> &mut Self
    where
        F: Fn(&mut Res, &Req, &[&str]) + Send + Sync + 'static,
    {
        self.handle_all(path, Arc::new(f))
    }
}

impl<Req, Res> Router<Handler<Req, Res>>
where
    Req: RequestContext,
    Res: ResponseSink,
{
    /// Route `req` and invoke its handler, or answer `404`/`405`.
    pub fn serve(&self, res: &mut Res, req: &Req) {
        match self.resolve(req.method_name(), req.request_path()) {
            Ok(route_match) => (route_match.handler)(res, req, &route_match.captures),
            Err(err) => write_route_error(res, &err),
        }
    }
}

/// Write the response for a routing failure, including `Allow` on a `405`
/// for a resolved route.
pub fn write_route_error<S>(res: &mut S, err: &RouteError)
where
    S: ResponseSink + ?Sized,
{
    let allowed = err.allowed();
    if !allowed.is_empty() {
        let list = allowed
            .iter()
            .map(|verb| verb.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if let Ok(value) = HeaderValue::from_str(&list) {
            res.write_header(ALLOW, value);
        }
    }
    write_error(res, err.status());
}

/// Plain-text error response: the status, its canonical reason phrase as
/// the body, and `nosniff`.
pub fn write_error<S>(res: &mut S, status: StatusCode)
where
    S: ResponseSink + ?Sized,
{
    res.write_header(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    res.write_header(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    res.write_status(status);
    res.write_body(status.canonical_reason().unwrap_or_default().as_bytes());
    res.write_body(b"\n");
}
