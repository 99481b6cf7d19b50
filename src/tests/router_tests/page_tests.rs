use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, test_state};

#[test]
fn home_page_loads() {
    let state = test_state();
    let resp = handle(get("/", None), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type").as_deref(),
        Some("text/html; charset=utf-8")
    );

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("How HouseWise Works"));
    assert!(body.contains(r#"href="/predict""#));
}

#[test]
fn about_page_loads() {
    let state = test_state();
    let resp = handle(get("/about", None), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("About HouseWise"));
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state();
    let err = handle(get("/nope", None), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn wrong_method_is_not_found() {
    let state = test_state();
    let err = handle(get("/api/predict", None), &state).unwrap_err();
    assert_eq!(err.status(), 404);
}
