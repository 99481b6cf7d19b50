use crate::predictor::{FallbackPolicy, RemotePredictor, FALLBACK_NOTICE};
use crate::router::{handle, AppState};
use crate::session::{SessionStore, SESSION_COOKIE};
use crate::tests::utils::{
    body_string, cookie_pair, get, header, post_form, test_state, VALID_FORM,
};
use std::net::TcpListener;
use std::time::Duration;

/// Submits the valid form and returns the cookie to send back.
fn submit(state: &AppState, form: &str) -> String {
    let resp = handle(post_form(form, None), state).expect("Failed to handle request");
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/results"));
    cookie_pair(&resp)
}

#[test]
fn fresh_form_uses_defaults() {
    let state = test_state();
    let resp = handle(get("/predict", None), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"action="/predict""#));
    assert!(body.contains(r#"name="bedrooms" value="3""#));
    assert!(body.contains(r#"name="squareFeet" value="1800""#));
    assert!(body.contains("Select a neighborhood"));
}

#[test]
fn valid_submission_redirects_with_session_cookie() {
    let state = test_state();
    let resp = handle(post_form(VALID_FORM, None), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 303);
    let set_cookie = header(&resp, "Set-Cookie").unwrap();
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=3600"));
}

#[test]
fn results_show_the_submitted_house() {
    let state = test_state();
    let cookie = submit(&state, VALID_FORM);

    let resp = handle(get("/results", Some(&cookie)), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Predicted Property Value"));
    assert!(body.contains("Confidence Level: "));
    assert!(body.contains("1,800 sq ft"));
    assert!(body.contains("3BR/2BA"));
    assert!(body.contains("Price Trend (Last 12 Months)"));
    assert!(!body.contains(FALLBACK_NOTICE));
}

#[test]
fn form_is_prefilled_from_session() {
    let state = test_state();
    let form = VALID_FORM.replace("bedrooms=3", "bedrooms=5").replace("downtown", "uptown");
    let cookie = submit(&state, &form);

    let resp = handle(get("/predict", Some(&cookie)), &state).expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains(r#"name="bedrooms" value="5""#));
    assert!(body.contains(r#"<option value="uptown" selected>"#));
}

#[test]
fn resubmitting_keeps_the_same_session() {
    let state = test_state();
    let cookie = submit(&state, VALID_FORM);

    let resp = handle(post_form(VALID_FORM, Some(&cookie)), &state).unwrap();
    assert_eq!(cookie_pair(&resp), cookie);
}

#[test]
fn results_without_session_redirect_to_form() {
    let state = test_state();
    let resp = handle(get("/results", None), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/predict"));
}

#[test]
fn results_with_unknown_session_redirect_to_form() {
    let state = test_state();
    let cookie = format!("{SESSION_COOKIE}=forged");
    let resp = handle(get("/results", Some(&cookie)), &state).unwrap();

    assert_eq!(resp.status(), 302);
}

#[test]
fn expired_session_redirects_to_form() {
    let state = AppState {
        policy: FallbackPolicy::local_only(),
        sessions: SessionStore::new(-1),
    };
    let cookie = submit(&state, VALID_FORM);

    let resp = handle(get("/results", Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn out_of_range_input_rerenders_form() {
    let state = test_state();
    let form = VALID_FORM.replace("bedrooms=3", "bedrooms=11");
    let resp = handle(post_form(&form, None), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 400);
    assert!(header(&resp, "Set-Cookie").is_none());

    let body = body_string(resp);
    assert!(body.contains(r#"name="bedrooms" value="11""#));
    assert!(body.contains(r#"class="field-error""#));
    assert!(body.contains("must be between 1 and 10"));
}

#[test]
fn missing_neighborhood_rerenders_form() {
    let state = test_state();
    let form = VALID_FORM.replace("&neighborhood=downtown", "");
    let resp = handle(post_form(&form, None), &state).unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("please select a neighborhood"));
}

#[test]
fn non_numeric_input_is_echoed_back() {
    let state = test_state();
    let form = VALID_FORM.replace("squareFeet=1800", "squareFeet=big");
    let resp = handle(post_form(&form, None), &state).unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains(r#"name="squareFeet" value="big""#));
}

#[test]
fn unreachable_service_falls_back_with_notice() {
    // bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let remote = RemotePredictor::new(
        format!("http://127.0.0.1:{port}/predict"),
        Duration::from_secs(2),
    )
    .unwrap();

    let state = AppState {
        policy: FallbackPolicy::with_remote(remote),
        sessions: SessionStore::new(3600),
    };
    let cookie = submit(&state, VALID_FORM);

    let resp = handle(get("/results", Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(FALLBACK_NOTICE));
}
