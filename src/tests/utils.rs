use crate::predictor::FallbackPolicy;
use crate::router::AppState;
use crate::session::SessionStore;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Fresh state answering with the local model only.
pub fn test_state() -> AppState {
    AppState {
        policy: FallbackPolicy::local_only(),
        sessions: SessionStore::new(3600),
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> astra::Request {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post(uri: &str, content_type: &str, body: &str, cookie: Option<&str>) -> astra::Request {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", content_type);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(body.as_bytes().to_vec())).unwrap()
}

pub fn post_form(body: &str, cookie: Option<&str>) -> astra::Request {
    post(
        "/predict",
        "application/x-www-form-urlencoded",
        body,
        cookie,
    )
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// `name=value` part of a `Set-Cookie` header, ready to send back.
pub fn cookie_pair(resp: &Response) -> String {
    let set_cookie = header(resp, "Set-Cookie").expect("no Set-Cookie header");
    set_cookie.split(';').next().unwrap().to_string()
}

pub const VALID_FORM: &str = "bedrooms=3&bathrooms=2&squareFeet=1800&lotSize=0.25&yearBuilt=2000\
&neighborhood=downtown&condition=good&hasGarage=on";
