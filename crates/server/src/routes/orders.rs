use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use utoipa::ToSchema;

use service::order_service::{self, OrderInput};

use crate::errors::ApiError;
use crate::routes::{AppState, Confirmation, ListQuery};

/// Full order body. `order_date` is RFC 3339 with offset, e.g.
/// `2024-05-01T12:30:00+00:00`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderPayload {
    pub user_id: i32,
    pub item_id: i32,
    #[schema(value_type = String, format = DateTime)]
    pub order_date: DateTime<FixedOffset>,
    pub status: String,
}

impl From<OrderPayload> for OrderInput {
    fn from(p: OrderPayload) -> Self {
        OrderInput {
            user_id: p.user_id,
            item_id: p.item_id,
            order_date: p.order_date,
            status: p.status,
        }
    }
}

#[utoipa::path(
    get,
    path = "/orders/",
    tag = "orders",
    params(ListQuery),
    responses((status = 200, description = "Page of orders in insertion order"))
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<models::order::Model>>, ApiError> {
    let orders = order_service::list_orders(&state.db, q.skip, q.limit).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/orders/",
    tag = "orders",
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Created order, id included"),
        (status = 422, description = "Referenced user or item does not exist")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<models::order::Model>, ApiError> {
    let order = order_service::create_order(&state.db, payload.into()).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order"),
        (status = 404, description = "No order with this id")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::order::Model>, ApiError> {
    let order = order_service::get_order(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order"))?;
    Ok(Json(order))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Updated order"),
        (status = 404, description = "No order with this id"),
        (status = 422, description = "Referenced user or item does not exist")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<models::order::Model>, ApiError> {
    let order = order_service::update_order(&state.db, id, payload.into()).await?;
    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "No order with this id")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Confirmation>, ApiError> {
    order_service::delete_order(&state.db, id).await?;
    Ok(Json(Confirmation::new("Order deleted")))
}
