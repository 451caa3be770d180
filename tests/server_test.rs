use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use museum_visitors::pipeline::AppContext;
use museum_visitors::resolver::{ReferenceCity, ReferenceTable};
use museum_visitors::server::{create_server, ServerState};
use museum_visitors::table::{BuilderSettings, StaticPageFetcher};
use tower::ServiceExt;

const MUSEUMS_PAGE: &str = include_str!("fixtures/most_visited_museums.html");

fn state_for(html: &str) -> Arc<ServerState> {
    let reference = Arc::new(ReferenceTable::from_cities(vec![
        ReferenceCity::new("Paris", Some("FR"), Some(11_060_000)),
        ReferenceCity::new("London", Some("GB"), Some(11_262_000)),
        ReferenceCity::new("New York", Some("US"), Some(18_908_608)),
        ReferenceCity::new("Seoul", Some("KR"), Some(21_794_000)),
        ReferenceCity::new("Madrid", Some("ES"), Some(6_006_000)),
        ReferenceCity::new("Saint Petersburg", Some("RU"), Some(5_384_342)),
        ReferenceCity::new("Vatican City", Some("VA"), Some(825)),
    ]));
    Arc::new(ServerState {
        ctx: AppContext::new(
            reference,
            Arc::new(StaticPageFetcher::new(html)),
            BuilderSettings::default(),
            85,
        ),
        default_populations: "1000000,5000000,10000000".to_string(),
    })
}

async fn get(state: Arc<ServerState>, uri: &str) -> (StatusCode, String) {
    let response = create_server(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(state: Arc<ServerState>, uri: &str) -> serde_json::Value {
    let (status, body) = get(state, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).expect("Response should be JSON")
}

#[tokio::test]
async fn test_root_greeting() {
    let json = get_json(state_for(MUSEUMS_PAGE), "/").await;
    assert_eq!(json["message"], "Hello from Museums API");
}

#[tokio::test]
async fn test_health() {
    let json = get_json(state_for(MUSEUMS_PAGE), "/health").await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_predict_with_populations() {
    let json = get_json(state_for(MUSEUMS_PAGE), "/predict?pops=1000000,2000000").await;

    assert!(json.get("error").is_none(), "unexpected error: {json}");
    let predictions = json["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 2);

    let slope = json["slope"].as_f64().unwrap();
    let intercept = json["intercept"].as_f64().unwrap();
    let first = predictions[0].as_f64().unwrap();
    assert!((first - (slope * 1_000_000.0 + intercept)).abs() < 1e-6);

    let r2 = json["r2"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&r2));
}

#[tokio::test]
async fn test_predict_uses_default_populations() {
    let json = get_json(state_for(MUSEUMS_PAGE), "/predict").await;
    assert_eq!(json["predictions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_predict_invalid_population() {
    let json = get_json(state_for(MUSEUMS_PAGE), "/predict?pops=1000000,abc").await;
    assert_eq!(json["error"], "Invalid population value: 'abc'");
    assert!(json.get("slope").is_none());
}

#[tokio::test]
async fn test_predict_reports_pipeline_failure() {
    let json = get_json(state_for("<html><body>Nothing here</body></html>"), "/predict").await;
    assert_eq!(json["error"], "No table found in the fetched page");
}

#[tokio::test]
async fn test_dashboard_without_prediction() {
    let (status, html) = get(state_for(MUSEUMS_PAGE), "/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Museums Table with Population"));
    assert!(html.contains("Louvre"));
    assert!(html.contains("8,700,000"));
    assert!(!html.contains("Vatican Museums"));
    assert!(!html.contains("Prediction Summary"));
}

#[tokio::test]
async fn test_dashboard_with_prediction() {
    let (status, html) = get(state_for(MUSEUMS_PAGE), "/dashboard?pops=1000000,5000000").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Prediction Summary"));
    assert!(html.contains("<td class=\"num\">5,000,000</td>"));
    assert!(html.contains("Slope: "));
    assert!(html.contains(r#"value="1000000,5000000""#));
}

#[tokio::test]
async fn test_dashboard_shows_errors_inline() {
    let (status, html) = get(state_for(MUSEUMS_PAGE), "/dashboard?pops=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Louvre"));
    assert!(html.contains("Error: Invalid population value: "));
    assert!(!html.contains("'abc'"));

    let (_, html) = get(state_for("<p>no table</p>"), "/dashboard").await;
    assert!(html.contains("Error: No table found in the fetched page"));
}
