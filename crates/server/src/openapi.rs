use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::metrics,
        crate::routes::tasks::list_tasks,
        crate::routes::tasks::create_task,
        crate::routes::tasks::get_task,
        crate::routes::tasks::update_task,
        crate::routes::tasks::delete_task,
    ),
    components(schemas(
        crate::routes::tasks::TaskPayload,
        crate::routes::Confirmation,
    )),
    tags(
        (name = "tasks", description = "Task list CRUD"),
        (name = "ops")
    )
)]
pub struct TasksApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::metrics,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::items::list_items,
        crate::routes::items::create_item,
        crate::routes::items::get_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
        crate::routes::orders::list_orders,
        crate::routes::orders::create_order,
        crate::routes::orders::get_order,
        crate::routes::orders::update_order,
        crate::routes::orders::delete_order,
    ),
    components(schemas(
        crate::routes::users::UserPayload,
        crate::routes::users::UserOut,
        crate::routes::items::ItemPayload,
        crate::routes::orders::OrderPayload,
        crate::routes::Confirmation,
    )),
    tags(
        (name = "users", description = "Shop customers"),
        (name = "items", description = "Shop catalog"),
        (name = "orders", description = "Orders joining users and items"),
        (name = "ops")
    )
)]
pub struct ShopApiDoc;

pub async fn tasks_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(TasksApiDoc::openapi())
}

pub async fn shop_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ShopApiDoc::openapi())
}
