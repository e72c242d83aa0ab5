mod common;

use common::{dispatch, handler, new_builder, Recorder};
use http::header::{ALLOW, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{HeaderValue, Request, Response, StatusCode};
use trierouter::dispatcher::{write_error, ResponseSink};
use trierouter::{Builder, Handler, RequestContext, Verb};

#[test]
fn test_not_found_response() {
    let router = new_builder().build();
    let res = dispatch(&router, "GET", "/missing");

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.body(), b"Not Found\n");
    assert_eq!(
        res.headers().get(CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(res.headers().get(X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert!(res.headers().get(ALLOW).is_none());
}

#[test]
fn test_method_not_allowed_lists_registered_verbs() {
    let rec = Recorder::new();
    let mut builder = new_builder();
    builder.handle(Verb::Post, "/items", rec.handler("post"));
    builder.handle(Verb::Delete, "/items", rec.handler("delete"));
    let router = builder.build();

    let res = dispatch(&router, "GET", "/items");
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.body(), b"Method Not Allowed\n");
    assert_eq!(res.headers().get(ALLOW).unwrap(), "DELETE, POST");
    assert!(rec.tagged_with(&[]));
}

#[test]
fn test_unrecognized_method_has_no_allow_header() {
    let rec = Recorder::new();
    let mut builder = new_builder();
    builder.handle(Verb::Get, "/items", rec.handler("get"));
    let router = builder.build();

    let res = dispatch(&router, "TRACE", "/items");
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.body(), b"Method Not Allowed\n");
    assert!(res.headers().get(ALLOW).is_none());
}

#[test]
fn test_handler_owns_successful_response() {
    let mut builder = new_builder();
    builder.handle_fn(Verb::Post, "/echo/*", |res, req, captures| {
        res.write_status(StatusCode::CREATED);
        res.write_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        res.write_body(req.method_name().as_bytes());
        res.write_body(b" ");
        res.write_body(captures[0].as_bytes());
    });
    let router = builder.build();

    let res = dispatch(&router, "POST", "/echo/hello");
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
    assert_eq!(res.body(), b"POST hello");
}

#[test]
fn test_silent_handler_writes_nothing() {
    let mut builder = new_builder();
    builder.handle_all_fn("/noop", |_res, _req, _captures| {});
    let router = builder.build();

    let res = dispatch(&router, "OPTIONS", "/noop");
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.body().is_empty());
    assert!(res.headers().is_empty());
}

#[test]
fn test_query_string_is_not_routed() {
    let rec = Recorder::new();
    let mut builder = new_builder();
    builder.handle(Verb::Get, "/search/*", rec.handler("search"));
    let router = builder.build();

    let res = dispatch(&router, "GET", "/search/books?page=2");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(rec.last_captures().unwrap(), ["books"]);
}

#[test]
fn test_request_context_for_http_request() {
    let req = Request::builder()
        .method("PATCH")
        .uri("http://example.com/a/b?x=1")
        .body(())
        .unwrap();
    assert_eq!(req.method_name(), "PATCH");
    assert_eq!(req.request_path(), "/a/b");
}

/// Sink with no header support, to check the trait's default.
#[derive(Default)]
struct RawSink {
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl ResponseSink for RawSink {
    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body.extend_from_slice(body);
    }
}

#[test]
fn test_custom_sink_receives_error() {
    let mut sink = RawSink::default();
    write_error(&mut sink, StatusCode::NOT_FOUND);
    assert_eq!(sink.status, Some(StatusCode::NOT_FOUND));
    assert_eq!(sink.body, b"Not Found\n");
}

#[test]
fn test_custom_transport_types() {
    struct Line {
        method: &'static str,
        path: &'static str,
    }

    impl RequestContext for Line {
        fn method_name(&self) -> &str {
            self.method
        }

        fn request_path(&self) -> &str {
            self.path
        }
    }

    let mut builder: Builder<Handler<Line, RawSink>> = Builder::new();
    builder.handle_fn(Verb::Get, "/greet/*", |res, _req, captures| {
        res.write_status(StatusCode::OK);
        res.write_body(format!("hi {}", captures[0]).as_bytes());
    });
    let router = builder.build();

    let mut sink = RawSink::default();
    router.serve(&mut sink, &Line { method: "GET", path: "/greet/ada" });
    assert_eq!(sink.status, Some(StatusCode::OK));
    assert_eq!(sink.body, b"hi ada");

    let mut sink = RawSink::default();
    router.serve(&mut sink, &Line { method: "PUT", path: "/greet/ada" });
    assert_eq!(sink.status, Some(StatusCode::METHOD_NOT_ALLOWED));
}

#[test]
fn test_handler_helper_registers_arc_closure() {
    let mut builder = new_builder();
    builder.handle(
        Verb::Get,
        "/*/*",
        handler(|res: &mut Response<Vec<u8>>, _req, captures| {
            res.body_mut().extend_from_slice(captures.join("+").as_bytes());
        }),
    );
    let router = builder.build();

    let res = dispatch(&router, "GET", "/left/right");
    assert_eq!(res.body(), b"left+right");
}
