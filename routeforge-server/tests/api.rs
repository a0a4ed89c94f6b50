use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use routeforge_core::EngineConfig;
use routeforge_server::{AppState, app};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    app(AppState::from_engine_config(&EngineConfig::default()).unwrap())
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn shanghai_to_beijing() -> Value {
    json!({
        "origin": {"latitude": 31.2304, "longitude": 121.4737},
        "destination": {"latitude": 39.9042, "longitude": 116.4074},
        "weight": {"value": 2.5, "unit": "kg"},
        "service_level": "standard"
    })
}

#[tokio::test]
async fn health_returns_ok() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn strategies_are_listed_in_order() {
    let response = test_app()
        .oneshot(Request::builder().uri("/v1/strategies").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"strategies": ["Fastest", "Cheapest", "Balanced"]})
    );
}

#[tokio::test]
async fn named_strategy_returns_one_summary() {
    let mut body = shanghai_to_beijing();
    body["strategy"] = json!("cheapest");

    let response = test_app().oneshot(post("/v1/routes", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["strategy"], "Cheapest");
    assert_eq!(json["found"], true);
    assert_eq!(json["waypoints"][0], "ORIGIN");
    assert_eq!(json["currency"], "CNY");
}

#[tokio::test]
async fn route_without_strategy_compares_all() {
    let response = test_app()
        .oneshot(post("/v1/routes", shanghai_to_beijing()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["strategy"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fastest", "Cheapest", "Balanced"]);
}

#[tokio::test]
async fn compare_endpoint_returns_every_strategy() {
    let response = test_app()
        .oneshot(post("/v1/routes/compare", shanghai_to_beijing()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["routes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_strategy_is_404() {
    let mut body = shanghai_to_beijing();
    body["strategy"] = json!("Scenic");

    let response = test_app().oneshot(post("/v1/routes", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], 404);
    assert_eq!(json["error"]["message"], "Strategy not found: Scenic");
}

#[tokio::test]
async fn identical_endpoints_are_422() {
    let mut body = shanghai_to_beijing();
    body["destination"] = body["origin"].clone();

    let response = test_app().oneshot(post("/v1/routes", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"]["code"], 422);
}

#[tokio::test]
async fn missing_weight_is_422() {
    let mut body = shanghai_to_beijing();
    body.as_object_mut().unwrap().remove("weight");

    let response = test_app().oneshot(post("/v1/routes/compare", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["error"]["message"],
        "Invalid request: weight is required"
    );
}

#[tokio::test]
async fn out_of_range_coordinate_is_422() {
    let mut body = shanghai_to_beijing();
    body["origin"]["latitude"] = json!(123.0);

    let response = test_app().oneshot(post("/v1/routes", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_422_with_error_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/routes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"origin\": "))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
    let json = body_json(response).await;
    assert!(json["error"]["message"].is_string());
}
