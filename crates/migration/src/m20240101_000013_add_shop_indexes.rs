use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // User: name columns used for lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_user_first_name")
                    .table(User::Table)
                    .col(User::FirstName)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_user_last_name")
                    .table(User::Table)
                    .col(User::LastName)
                    .to_owned(),
            )
            .await?;

        // Item: index on name
        manager
            .create_index(
                Index::create()
                    .name("idx_item_name")
                    .table(Item::Table)
                    .col(Item::Name)
                    .to_owned(),
            )
            .await?;

        // Order: FK columns
        manager
            .create_index(
                Index::create()
                    .name("idx_order_user")
                    .table(Order::Table)
                    .col(Order::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_order_item")
                    .table(Order::Table)
                    .col(Order::ItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_first_name").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_last_name").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_item_name").table(Item::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_user").table(Order::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_item").table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User { Table, FirstName, LastName }

#[derive(DeriveIden)]
enum Item { Table, Name }

#[derive(DeriveIden)]
enum Order { Table, UserId, ItemId }
