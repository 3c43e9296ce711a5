pub mod items;
pub mod orders;
pub mod tasks;
pub mod users;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Json, Router};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::{IntoParams, ToSchema};

use common::types::Health;

use crate::openapi;

/// Shared handler state; one connection pool per process, injected when
/// the router is built.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

fn default_limit() -> u64 {
    100
}

/// Offset pagination for list endpoints: `?skip=0&limit=100`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// Body of successful deletes, e.g. `{"message": "Task deleted successfully"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Confirmation {
            message: message.into(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "ops",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "ops",
    responses((status = 200, description = "Prometheus text exposition"))
)]
pub async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn build_trace() -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}

fn ops_routes(openapi_handler: axum::routing::MethodRouter<AppState>) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", openapi_handler)
}

/// Task service router. Collection and member paths carry trailing
/// slashes; `/tasks/1` and `/tasks/1/` are distinct and only the latter
/// exists.
pub fn build_tasks_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/tasks/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/:id/",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        );

    api.merge(ops_routes(get(openapi::tasks_openapi)))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(build_trace())
                .layer(build_cors())
                .layer(middleware::from_fn(common::metrics::track)),
        )
}

/// Shop service router: users, items and orders. Collection paths end
/// in a slash, member paths do not.
pub fn build_shop_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/items/", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/orders/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/:id",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        );

    api.merge(ops_routes(get(openapi::shop_openapi)))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(build_trace())
                .layer(build_cors())
                .layer(middleware::from_fn(common::metrics::track)),
        )
}
