//! Router construction and request handlers

use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use campus_router_core::{
    CampusModel, DEFAULT_SEARCH_LIMIT, Place, RouteEndpoint, WalkingRoute, create_campus_model,
};
use serde::{Deserialize, Serialize};
use tower::{ServiceBuilder, limit::GlobalConcurrencyLimitLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{ApiError, ServerConfig, SharedState};

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: SharedState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/places", get(search_places))
        .route("/places/all", get(all_places))
        .route("/places/{id}", get(get_place))
        .route("/route", post(route))
        .route("/route/geojson", post(route_geojson))
        .route("/boundary", get(boundary_extent))
        .route("/boundary/contains", get(boundary_contains))
        .route("/reload", post(reload))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .layer(GlobalConcurrencyLimitLayer::new(config.max_concurrent_requests)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::new(StatusCode::REQUEST_TIMEOUT, "timeout", "Request took too long")
    } else {
        ApiError::internal(err.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub nodes: usize,
    pub edges: usize,
    pub places: usize,
    pub has_boundary: bool,
}

impl HealthResponse {
    fn from_model(model: &CampusModel) -> Self {
        let graph = model.routing.graph();
        Self {
            status: if graph.is_empty() { "no_data" } else { "ok" }.to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            places: model.places.len(),
            has_boundary: model.boundary.is_some(),
        }
    }
}

/// GET /health
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_model(&state.model()))
}

#[derive(Debug, Deserialize)]
pub struct PlacesQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// GET /places?q=lh&limit=6
async fn search_places(
    State(state): State<SharedState>,
    Query(params): Query<PlacesQuery>,
) -> Json<Vec<Place>> {
    let model = state.model();
    let query = params.q.as_deref().unwrap_or_default();
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

    let matches: Vec<Place> = model
        .places
        .search(query, limit)
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!(query, found = matches.len(), "place search");
    Json(matches)
}

/// GET /places/all - every place ordered by name, for selection lists
async fn all_places(State(state): State<SharedState>) -> Json<Vec<Place>> {
    let model = state.model();
    Json(model.places.sorted_by_name().into_iter().cloned().collect())
}

/// GET /places/{id}
async fn get_place(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Place>, ApiError> {
    state
        .model()
        .place(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::NOT_FOUND,
                "unknown_place",
                format!("Place not found: {id}"),
            )
        })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteRequest {
    pub from: RouteEndpoint,
    pub to: RouteEndpoint,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub route: WalkingRoute,
    pub summary: String,
}

fn compute_route(state: &SharedState, request: &RouteRequest) -> Result<WalkingRoute, ApiError> {
    let model = state.model();

    if state.restrict_to_campus() {
        for endpoint in [&request.from, &request.to] {
            if let RouteEndpoint::Location(point) = endpoint
                && !model.is_on_campus(*point)
            {
                return Err(ApiError::off_campus());
            }
        }
    }

    let route = model.route_between(&request.from, &request.to)?;
    tracing::debug!(
        distance_m = route.distance_m,
        eta_minutes = route.eta_minutes,
        "route computed"
    );
    Ok(route)
}

/// POST /route
async fn route(
    State(state): State<SharedState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let route = compute_route(&state, &request)?;
    Ok(Json(RouteResponse {
        summary: route.summary(),
        route,
    }))
}

/// POST /route/geojson
async fn route_geojson(
    State(state): State<SharedState>,
    Json(request): Json<RouteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let route = compute_route(&state, &request)?;
    let body = route.to_geojson_string()?;
    Ok(([(header::CONTENT_TYPE, "application/geo+json")], body))
}

/// Campus extent in degrees, usable as map max bounds
#[derive(Debug, Serialize, Deserialize)]
pub struct BoundsResponse {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// GET /boundary
async fn boundary_extent(
    State(state): State<SharedState>,
) -> Result<Json<BoundsResponse>, ApiError> {
    let rect = state
        .model()
        .boundary
        .as_ref()
        .and_then(|boundary| boundary.bounding_rect())
        .ok_or_else(|| {
            ApiError::new(StatusCode::NOT_FOUND, "no_boundary", "No campus boundary loaded")
        })?;

    Ok(Json(BoundsResponse {
        south: rect.min().y,
        west: rect.min().x,
        north: rect.max().y,
        east: rect.max().x,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PointQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContainsResponse {
    pub on_campus: bool,
}

/// GET /boundary/contains?lat=..&lng=..
async fn boundary_contains(
    State(state): State<SharedState>,
    Query(point): Query<PointQuery>,
) -> Json<ContainsResponse> {
    let on_campus = state
        .model()
        .is_on_campus(campus_router_core::GeoPoint::new(point.lat, point.lng));
    Json(ContainsResponse { on_campus })
}

/// POST /reload - rebuild the model from disk and swap it in
async fn reload(State(state): State<SharedState>) -> Result<Json<HealthResponse>, ApiError> {
    let data = state.data().clone();
    let model = tokio::task::spawn_blocking(move || create_campus_model(&data))
        .await
        .map_err(|e| ApiError::internal(format!("Reload task failed: {e}")))??;

    let health = HealthResponse::from_model(&model);
    state.replace_model(model);
    tracing::info!(nodes = health.nodes, places = health.places, "campus data reloaded");
    Ok(Json(health))
}
