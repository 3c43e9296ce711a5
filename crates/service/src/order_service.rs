use models::order::{self, Entity as Order};
use models::{item, user};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QuerySelect, Set,
    TransactionTrait,
};
use tracing::info;

use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct OrderInput {
    pub user_id: i32,
    pub item_id: i32,
    pub order_date: DateTimeWithTimeZone,
    pub status: String,
}

/// Reject references to absent rows up front, inside the caller's
/// transaction, so the response names the missing entity instead of
/// leaking a driver-level constraint failure.
async fn ensure_references<C: ConnectionTrait>(
    conn: &C,
    input: &OrderInput,
) -> Result<(), ServiceError> {
    if user::Entity::find_by_id(input.user_id).one(conn).await?.is_none() {
        return Err(ServiceError::validation(format!(
            "user {} does not exist",
            input.user_id
        )));
    }
    if item::Entity::find_by_id(input.item_id).one(conn).await?.is_none() {
        return Err(ServiceError::validation(format!(
            "item {} does not exist",
            input.item_id
        )));
    }
    Ok(())
}

pub async fn list_orders(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<order::Model>, ServiceError> {
    let rows = Order::find().offset(skip).limit(limit).all(db).await?;
    Ok(rows)
}

pub async fn get_order(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<order::Model>, ServiceError> {
    Ok(Order::find_by_id(id).one(db).await?)
}

pub async fn create_order(
    db: &DatabaseConnection,
    input: OrderInput,
) -> Result<order::Model, ServiceError> {
    let txn = db.begin().await?;
    ensure_references(&txn, &input).await?;
    let created = order::ActiveModel {
        user_id: Set(input.user_id),
        item_id: Set(input.item_id),
        order_date: Set(input.order_date),
        status: Set(input.status),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(id = created.id, user_id = created.user_id, item_id = created.item_id, "created order");
    Ok(created)
}

pub async fn update_order(
    db: &DatabaseConnection,
    id: i32,
    input: OrderInput,
) -> Result<order::Model, ServiceError> {
    let txn = db.begin().await?;
    let existing = Order::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Order"))?;
    ensure_references(&txn, &input).await?;

    let mut pending: order::ActiveModel = existing.into();
    pending.user_id = Set(input.user_id);
    pending.item_id = Set(input.item_id);
    pending.order_date = Set(input.order_date);
    pending.status = Set(input.status);
    let updated = pending.update(&txn).await?;
    txn.commit().await?;

    info!(id = updated.id, "updated order");
    Ok(updated)
}

pub async fn delete_order(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let result = Order::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("Order"));
    }
    info!(id, "deleted order");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::DatabaseConnection;

    use super::*;
    use crate::test_support;
    use crate::{item_service, user_service};

    async fn seed_user(db: &DatabaseConnection, email: &str) -> anyhow::Result<user::Model> {
        Ok(user_service::create_user(
            db,
            user_service::UserInput {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: email.to_string(),
                password: "cobol forever".to_string(),
            },
        )
        .await?)
    }

    async fn seed_item(db: &DatabaseConnection, name: &str) -> anyhow::Result<item::Model> {
        Ok(item_service::create_item(
            db,
            item_service::ItemInput {
                name: name.to_string(),
                description: "shiny".to_string(),
                price: 12.00,
            },
        )
        .await?)
    }

    fn input(user_id: i32, item_id: i32) -> OrderInput {
        OrderInput {
            user_id,
            item_id,
            order_date: Utc::now().into(),
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_missing_references_by_name() -> anyhow::Result<()> {
        let db = test_support::shop_db().await?;

        let err = create_order(&db, input(1, 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "validation error: user 1 does not exist");

        let user = seed_user(&db, "grace@example.com").await?;
        let err = create_order(&db, input(user.id, 99)).await.unwrap_err();
        assert_eq!(err.to_string(), "validation error: item 99 does not exist");

        assert!(list_orders(&db, 0, 100).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_get_update_delete_flow() -> anyhow::Result<()> {
        let db = test_support::shop_db().await?;

        let user = seed_user(&db, "buyer@example.com").await?;
        let item = seed_item(&db, "compiler").await?;

        let created = create_order(&db, input(user.id, item.id)).await?;
        assert_eq!(created.status, "pending");
        assert_eq!(get_order(&db, created.id).await?.unwrap(), created);

        let mut replacement = input(user.id, item.id);
        replacement.status = "shipped".to_string();
        let updated = update_order(&db, created.id, replacement).await?;
        assert_eq!(updated.status, "shipped");

        delete_order(&db, created.id).await?;
        let err = delete_order(&db, created.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Order not found");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_order_is_not_found() -> anyhow::Result<()> {
        let db = test_support::shop_db().await?;

        let user = seed_user(&db, "lone@example.com").await?;
        let item = seed_item(&db, "widget").await?;
        let err = update_order(&db, 5, input(user.id, item.id)).await.unwrap_err();
        assert_eq!(err.to_string(), "Order not found");
        Ok(())
    }

    #[tokio::test]
    async fn referenced_user_and_item_cannot_be_deleted() -> anyhow::Result<()> {
        let db = test_support::shop_db().await?;

        let user = seed_user(&db, "pinned@example.com").await?;
        let item = seed_item(&db, "anchor").await?;
        let order = create_order(&db, input(user.id, item.id)).await?;

        let err = user_service::delete_user(&db, user.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        let err = item_service::delete_item(&db, item.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        delete_order(&db, order.id).await?;
        user_service::delete_user(&db, user.id).await?;
        item_service::delete_item(&db, item.id).await?;
        Ok(())
    }
}
