//! Create `task` table.
//!
//! One row per task; `done` defaults to false at the storage level.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(integer(Task::Id).primary_key().auto_increment())
                    .col(string_len(Task::Title, 100).not_null())
                    .col(string_len(Task::Description, 255).not_null())
                    .col(boolean(Task::Done).not_null().default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Task::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Task { Table, Id, Title, Description, Done }
