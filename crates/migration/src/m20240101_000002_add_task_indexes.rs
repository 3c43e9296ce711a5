use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Task: index on title for lookups by name
        manager
            .create_index(
                Index::create()
                    .name("idx_task_title")
                    .table(Task::Table)
                    .col(Task::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_task_title").table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Task { Table, Title }
