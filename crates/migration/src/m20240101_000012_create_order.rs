//! Create `order` table with FKs to `user` and `item`.
//!
//! Deletes of referenced rows are restricted rather than cascaded, so an
//! order can never point at a row that no longer exists.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(integer(Order::Id).primary_key().auto_increment())
                    .col(integer(Order::UserId).not_null())
                    .col(integer(Order::ItemId).not_null())
                    .col(timestamp_with_time_zone(Order::OrderDate).not_null())
                    .col(string(Order::Status).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item")
                            .from(Order::Table, Order::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order { Table, Id, UserId, ItemId, OrderDate, Status }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Item { Table, Id }
