use crate::errors::ServerError;
use crate::router::{handle, MAX_BODY_BYTES};
use crate::tests::utils::{body_string, get, header, post, test_state};
use serde_json::Value;

fn post_json(body: &str) -> astra::Request {
    post("/api/predict", "application/json", body, None)
}

#[test]
fn health_check() {
    let state = test_state();
    let resp = handle(get("/health", None), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type").as_deref(),
        Some("application/json")
    );
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[test]
fn api_predict_returns_backend_shape() {
    let state = test_state();
    let req = post_json(
        r#"{"bedrooms":3,"bathrooms":2,"squareFeet":1800,"lotSize":0.25,
            "yearBuilt":2000,"neighborhood":"downtown","condition":"good",
            "hasGarage":true,"hasPool":false}"#,
    );
    let resp = handle(req, &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    let price = json["predictedPrice"].as_i64().unwrap();
    assert!(price > 0 && price % 1000 == 0);

    let confidence = json["confidence"].as_u64().unwrap();
    assert!((75..=95).contains(&confidence));

    assert!(json["priceRange"]["lower"].as_i64().unwrap() < price);
    assert!(json["priceRange"]["upper"].as_i64().unwrap() > price);
    assert_eq!(json["pricePerSqFt"].as_i64().unwrap(), (price as f64 / 1800.0).round() as i64);
    assert_eq!(json["trendData"].as_array().unwrap().len(), 12);
}

#[test]
fn api_predict_rejects_out_of_range_input() {
    let state = test_state();
    let req = post_json(
        r#"{"bedrooms":0,"bathrooms":2,"squareFeet":1800,"lotSize":0.25,
            "yearBuilt":2000,"neighborhood":"downtown","condition":"good"}"#,
    );
    let resp = handle(req, &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 400);

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].as_str().unwrap().contains("bedrooms"));
}

#[test]
fn api_predict_rejects_malformed_json() {
    let state = test_state();
    let resp = handle(post_json("{not json"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 400);

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("invalid request body"));
}

#[test]
fn api_predict_rejects_unknown_neighborhood() {
    let state = test_state();
    let req = post_json(
        r#"{"bedrooms":3,"bathrooms":2,"squareFeet":1800,"lotSize":0.25,
            "yearBuilt":2000,"neighborhood":"atlantis","condition":"good"}"#,
    );
    let resp = handle(req, &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 400);
}

#[test]
fn oversized_body_is_rejected_not_truncated() {
    let state = test_state();
    let valid = r#"{"bedrooms":3,"bathrooms":2,"squareFeet":1800,"lotSize":0.25,"yearBuilt":2000,"neighborhood":"downtown","condition":"good"}"#;
    // valid JSON prefix followed by padding past the limit
    let body = format!("{valid}{}", " ".repeat(MAX_BODY_BYTES as usize));

    let err = handle(post_json(&body), &state).unwrap_err();
    assert!(matches!(&err, ServerError::BadRequest(msg) if msg.contains("larger than")));
    assert_eq!(err.status(), 400);
}

#[test]
fn body_at_the_limit_is_accepted() {
    let state = test_state();
    let valid = r#"{"bedrooms":3,"bathrooms":2,"squareFeet":1800,"lotSize":0.25,"yearBuilt":2000,"neighborhood":"downtown","condition":"good"}"#;
    let body = format!("{valid}{}", " ".repeat(MAX_BODY_BYTES as usize - valid.len()));

    let resp = handle(post_json(&body), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
}
