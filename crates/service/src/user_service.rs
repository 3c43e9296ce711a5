use models::user::{self, Entity as User};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use crate::errors::ServiceError;
use crate::password;

/// Full user payload. The raw password only lives here; it is hashed
/// before anything touches the database.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

fn validate(input: &UserInput) -> Result<(), ServiceError> {
    user::validate_name(&input.first_name, "first_name")?;
    user::validate_name(&input.last_name, "last_name")?;
    user::validate_email(&input.email)?;
    password::validate_password(&input.password)?;
    Ok(())
}

async fn email_taken<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    exclude_id: Option<i32>,
) -> Result<bool, ServiceError> {
    let mut query = User::find().filter(user::Column::Email.eq(email));
    if let Some(id) = exclude_id {
        query = query.filter(user::Column::Id.ne(id));
    }
    Ok(query.one(conn).await?.is_some())
}

pub async fn list_users(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<user::Model>, ServiceError> {
    let rows = User::find().offset(skip).limit(limit).all(db).await?;
    Ok(rows)
}

pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    Ok(User::find_by_id(id).one(db).await?)
}

pub async fn create_user(
    db: &DatabaseConnection,
    input: UserInput,
) -> Result<user::Model, ServiceError> {
    validate(&input)?;
    let password_hash = password::hash_password(&input.password)?;

    let txn = db.begin().await?;
    if email_taken(&txn, &input.email, None).await? {
        return Err(ServiceError::conflict(format!(
            "email {} already registered",
            input.email
        )));
    }
    let created = user::ActiveModel {
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
        password_hash: Set(password_hash),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(id = created.id, "created user");
    Ok(created)
}

/// Full replace, password included; the stored hash is recomputed.
pub async fn update_user(
    db: &DatabaseConnection,
    id: i32,
    input: UserInput,
) -> Result<user::Model, ServiceError> {
    validate(&input)?;
    let password_hash = password::hash_password(&input.password)?;

    let txn = db.begin().await?;
    let existing = User::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("User"))?;
    if email_taken(&txn, &input.email, Some(id)).await? {
        return Err(ServiceError::conflict(format!(
            "email {} already registered",
            input.email
        )));
    }

    let mut pending: user::ActiveModel = existing.into();
    pending.first_name = Set(input.first_name);
    pending.last_name = Set(input.last_name);
    pending.email = Set(input.email);
    pending.password_hash = Set(password_hash);
    let updated = pending.update(&txn).await?;
    txn.commit().await?;

    info!(id = updated.id, "updated user");
    Ok(updated)
}

/// Fails with a conflict while any order still references the user.
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let result = User::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("User"));
    }
    info!(id, "deleted user");
    Ok(())
}
