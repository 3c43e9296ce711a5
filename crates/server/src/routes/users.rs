use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use service::user_service::{self, UserInput};

use crate::errors::ApiError;
use crate::routes::{AppState, Confirmation, ListQuery};

/// Full user body. The password arrives in plain text over the API and
/// is hashed before storage.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<UserPayload> for UserInput {
    fn from(p: UserPayload) -> Self {
        UserInput {
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            password: p.password,
        }
    }
}

/// Response shape for users; neither the password nor its hash leaves
/// the service.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserOut {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<models::user::Model> for UserOut {
    fn from(m: models::user::Model) -> Self {
        UserOut {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(ListQuery),
    responses((status = 200, description = "Page of users in insertion order"))
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<UserOut>>, ApiError> {
    let users = user_service::list_users(&state.db, q.skip, q.limit).await?;
    Ok(Json(users.into_iter().map(UserOut::from).collect()))
}

#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Created user, password omitted"),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserOut>, ApiError> {
    let user = user_service::create_user(&state.db, payload.into()).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User"),
        (status = 404, description = "No user with this id")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserOut>, ApiError> {
    let user = user_service::get_user(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user"),
        (status = 404, description = "No user with this id"),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserOut>, ApiError> {
    let user = user_service::update_user(&state.db, id, payload.into()).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "No user with this id"),
        (status = 409, description = "User is still referenced by an order")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Confirmation>, ApiError> {
    user_service::delete_user(&state.db, id).await?;
    Ok(Json(Confirmation::new("User deleted")))
}
