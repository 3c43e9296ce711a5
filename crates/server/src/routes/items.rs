use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use service::item_service::{self, ItemInput};

use crate::errors::ApiError;
use crate::routes::{AppState, Confirmation, ListQuery};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<ItemPayload> for ItemInput {
    fn from(p: ItemPayload) -> Self {
        ItemInput {
            name: p.name,
            description: p.description,
            price: p.price,
        }
    }
}

#[utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    params(ListQuery),
    responses((status = 200, description = "Page of items in insertion order"))
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<models::item::Model>>, ApiError> {
    let items = item_service::list_items(&state.db, q.skip, q.limit).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Created item, id included"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<models::item::Model>, ApiError> {
    let item = item_service::create_item(&state.db, payload.into()).await?;
    Ok(Json(item))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item"),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::item::Model>, ApiError> {
    let item = item_service::get_item(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Item"))?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated item"),
        (status = 404, description = "No item with this id"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<models::item::Model>, ApiError> {
    let item = item_service::update_item(&state.db, id, payload.into()).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "No item with this id"),
        (status = 409, description = "Item is still referenced by an order")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Confirmation>, ApiError> {
    item_service::delete_item(&state.db, id).await?;
    Ok(Json(Confirmation::new("Item deleted")))
}
