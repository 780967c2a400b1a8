use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::services::{QueryResult, WeatherService};
use crate::templates::IndexTemplate;

#[derive(Clone)]
pub struct AppState {
    pub weather_service: WeatherService,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Form body and query string share the same optional `city` field.
/// A missing field and an empty one both mean "use the defaults".
#[derive(Debug, Default, Deserialize)]
pub struct CityParams {
    #[serde(default)]
    pub city: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather_json));

    Router::new()
        .route("/", get(index).post(search))
        .nest("/api/v1", api_routes)
        .with_state(state)
}

#[instrument]
async fn health() -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state))]
async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    debug!("Rendering default city list");
    let results = state.weather_service.handle(None).await;
    render_page(None, &results)
}

#[instrument(skip(state))]
async fn search(
    State(state): State<AppState>,
    Form(params): Form<CityParams>,
) -> Result<Html<String>, StatusCode> {
    let requested = params.city.as_deref();
    debug!("Rendering weather for submitted city {:?}", requested);
    let results = state.weather_service.handle(requested).await;
    render_page(requested, &results)
}

#[instrument(skip(state))]
async fn get_weather_json(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Json<Vec<QueryResult>> {
    let results = state.weather_service.handle(params.city.as_deref()).await;
    info!("Returning {} weather results as JSON", results.len());
    Json(results)
}

fn render_page(requested: Option<&str>, results: &[QueryResult]) -> Result<Html<String>, StatusCode> {
    let html = IndexTemplate::new(requested, results).render().map_err(|e| {
        error!("Failed to render weather page: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!("Rendered weather page with {} entries", results.len());
    Ok(Html(html))
}
