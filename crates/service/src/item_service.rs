use models::item::{self, Entity as Item};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QuerySelect, Set, TransactionTrait};
use tracing::info;

use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
    pub price: f64,
}

fn validate(input: &ItemInput) -> Result<(), ServiceError> {
    item::validate_name(&input.name)?;
    item::validate_description(&input.description)?;
    Ok(())
}

pub async fn list_items(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<item::Model>, ServiceError> {
    let rows = Item::find().offset(skip).limit(limit).all(db).await?;
    Ok(rows)
}

pub async fn get_item(db: &DatabaseConnection, id: i32) -> Result<Option<item::Model>, ServiceError> {
    Ok(Item::find_by_id(id).one(db).await?)
}

pub async fn create_item(
    db: &DatabaseConnection,
    input: ItemInput,
) -> Result<item::Model, ServiceError> {
    validate(&input)?;

    let txn = db.begin().await?;
    let created = item::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(id = created.id, "created item");
    Ok(created)
}

pub async fn update_item(
    db: &DatabaseConnection,
    id: i32,
    input: ItemInput,
) -> Result<item::Model, ServiceError> {
    validate(&input)?;

    let txn = db.begin().await?;
    let existing = Item::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Item"))?;

    let mut pending: item::ActiveModel = existing.into();
    pending.name = Set(input.name);
    pending.description = Set(input.description);
    pending.price = Set(input.price);
    let updated = pending.update(&txn).await?;
    txn.commit().await?;

    info!(id = updated.id, "updated item");
    Ok(updated)
}

/// Fails with a conflict while any order still references the item.
pub async fn delete_item(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let result = Item::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("Item"));
    }
    info!(id, "deleted item");
    Ok(())
}
