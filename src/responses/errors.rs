use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "We couldn't find the page you were looking for.".to_string(),
        ServerError::InternalError => "Something went wrong on our side.".to_string(),
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
