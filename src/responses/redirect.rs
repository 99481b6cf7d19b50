// responses/redirect.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 302 to `location`.
pub fn redirect(location: &str) -> ResultResp {
    redirect_with(302, location, None)
}

/// 303 See Other after a form POST, optionally setting a cookie.
pub fn see_other(location: &str, set_cookie: Option<&str>) -> ResultResp {
    redirect_with(303, location, set_cookie)
}

fn redirect_with(status: u16, location: &str, set_cookie: Option<&str>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Location", location);

    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
