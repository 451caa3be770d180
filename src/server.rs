use crate::dashboard::DashboardTemplate;
use crate::pipeline::{
    get_museum_dataset, make_predictions, parse_populations, predict_visitors, AppContext,
};
use askama::Template;
use axum::{
    extract::Query,
    http::Method,
    response::{Html, IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Shared, read-only state handed to every request
pub struct ServerState {
    pub ctx: AppContext,
    pub default_populations: String,
}

#[derive(Debug, Deserialize)]
pub struct PopsQuery {
    pub pops: Option<String>,
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Hello from Museums API" }))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "museum-visitors",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Rebuild the dataset, fit, and predict. Failures come back as `{"error": ...}`.
async fn predict(
    Extension(state): Extension<Arc<ServerState>>,
    Query(params): Query<PopsQuery>,
) -> Json<serde_json::Value> {
    let pops = params
        .pops
        .unwrap_or_else(|| state.default_populations.clone());
    let ctx = state.ctx.clone();

    let result = tokio::task::spawn_blocking(move || predict_visitors(&ctx, &pops)).await;
    match result {
        Ok(Ok(report)) => Json(serde_json::json!(report)),
        Ok(Err(e)) => Json(serde_json::json!({ "error": e.to_string() })),
        Err(e) => {
            error!("Prediction task failed: {}", e);
            Json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// HTML dashboard; predictions are computed only when `pops` is submitted
async fn dashboard_page(
    Extension(state): Extension<Arc<ServerState>>,
    Query(params): Query<PopsQuery>,
) -> Html<String> {
    let submitted = params.pops;
    let pops = submitted
        .clone()
        .unwrap_or_else(|| state.default_populations.clone());
    let ctx = state.ctx.clone();

    let rendered = tokio::task::spawn_blocking(move || {
        let dataset = get_museum_dataset(&ctx);
        let prediction = match (&dataset, &submitted) {
            (Ok(dataset), Some(pops)) => Some(
                parse_populations(pops)
                    .and_then(|populations| {
                        make_predictions(dataset, pops).map(|report| (populations, report))
                    })
                    .map_err(|e| e.to_string()),
            ),
            _ => None,
        };
        DashboardTemplate::new(&pops, dataset.as_ref().map_err(|e| e.to_string()), prediction)
            .render()
    })
    .await;

    match rendered {
        Ok(Ok(html)) => Html(html),
        Ok(Err(e)) => {
            error!("Dashboard rendering failed: {}", e);
            Html("<h1>Error rendering dashboard</h1>".to_string())
        }
        Err(e) => {
            error!("Dashboard task failed: {}", e);
            Html("<h1>Error rendering dashboard</h1>".to_string())
        }
    }
}

/// Create the HTTP router with the API and dashboard routes
pub fn create_server(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict", get(predict))
        .route("/dashboard", get(dashboard_page))
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(
    state: Arc<ServerState>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_server(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server running on http://localhost:{port}");
    info!("Predict:   http://localhost:{port}/predict?pops=1000000,5000000");
    info!("Dashboard: http://localhost:{port}/dashboard");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
