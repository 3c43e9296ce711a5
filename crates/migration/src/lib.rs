//! Migrators for the two service schemas.
//!
//! The task service and the shop service own disjoint tables in separate
//! database files, so each gets its own migrator. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_task;
mod m20240101_000002_add_task_indexes;
mod m20240101_000010_create_user;
mod m20240101_000011_create_item;
mod m20240101_000012_create_order;
mod m20240101_000013_add_shop_indexes;

/// Schema of the task service (`tasks.db`).
pub struct TaskMigrator;

#[async_trait::async_trait]
impl MigratorTrait for TaskMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_task::Migration),
            Box::new(m20240101_000002_add_task_indexes::Migration),
        ]
    }
}

/// Schema of the shop service (`internet_shop.db`).
pub struct ShopMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ShopMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000010_create_user::Migration),
            Box::new(m20240101_000011_create_item::Migration),
            Box::new(m20240101_000012_create_order::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000013_add_shop_indexes::Migration),
        ]
    }
}
