use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2 PHC string; never the raw password.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.is_empty() || !email.contains('@') {
        return Err(ModelError::validation("invalid email"));
    }
    Ok(())
}

pub fn validate_name(value: &str, field: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} required")));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::validation(format!(
            "{field} must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}
