
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

fn temp_url(prefix: &str) -> String {
    let path = std::env::temp_dir().join(format!("taskshop_{}_{}.db", prefix, Uuid::new_v4()));
    format!("sqlite://{}?mode=rwc", path.display())
}

async fn fresh_db(prefix: &str) -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: temp_url(prefix),
        max_connections: 5,
        min_connections: 1,
        ..Default::default()
    };
    crate::db::connect(&cfg).await
}

/// Throwaway task database with migrations applied.
pub async fn task_db() -> anyhow::Result<DatabaseConnection> {
    let db = fresh_db("task").await?;
    migration::TaskMigrator::up(&db, None).await?;
    Ok(db)
}

/// Throwaway shop database with migrations applied.
pub async fn shop_db() -> anyhow::Result<DatabaseConnection> {
    let db = fresh_db("shop").await?;
    migration::ShopMigrator::up(&db, None).await?;
    Ok(db)
}
