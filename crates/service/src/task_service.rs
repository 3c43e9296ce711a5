use models::task::{self, Entity as Task};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QuerySelect, Set, TransactionTrait};
use tracing::info;

use crate::errors::ServiceError;

/// Full task payload; create and full-replace update share it.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub done: bool,
}

fn validate(input: &TaskInput) -> Result<(), ServiceError> {
    task::validate_title(&input.title)?;
    task::validate_description(&input.description)?;
    Ok(())
}

/// Page through tasks in insertion order.
pub async fn list_tasks(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<task::Model>, ServiceError> {
    let rows = Task::find().offset(skip).limit(limit).all(db).await?;
    Ok(rows)
}

pub async fn get_task(db: &DatabaseConnection, id: i32) -> Result<Option<task::Model>, ServiceError> {
    Ok(Task::find_by_id(id).one(db).await?)
}

pub async fn create_task(
    db: &DatabaseConnection,
    input: TaskInput,
) -> Result<task::Model, ServiceError> {
    validate(&input)?;

    let txn = db.begin().await?;
    let created = task::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        done: Set(input.done),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(id = created.id, "created task");
    Ok(created)
}

/// Full replace. The lookup and the write share one transaction so a
/// concurrent delete cannot slip between them.
pub async fn update_task(
    db: &DatabaseConnection,
    id: i32,
    input: TaskInput,
) -> Result<task::Model, ServiceError> {
    validate(&input)?;

    let txn = db.begin().await?;
    let existing = Task::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Task"))?;

    let mut pending: task::ActiveModel = existing.into();
    pending.title = Set(input.title);
    pending.description = Set(input.description);
    pending.done = Set(input.done);
    let updated = pending.update(&txn).await?;
    txn.commit().await?;

    info!(id = updated.id, "updated task");
    Ok(updated)
}

pub async fn delete_task(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let result = Task::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("Task"));
    }
    info!(id, "deleted task");
    Ok(())
}
