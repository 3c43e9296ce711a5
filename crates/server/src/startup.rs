use std::env;
use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use migration::{MigratorTrait, ShopMigrator, TaskMigrator};
use tracing::info;

use crate::routes::{build_shop_router, build_tasks_router, AppState};

/// Initialize logging via shared common utils; `LOG_FORMAT=json`
/// switches to structured output.
pub fn init_logging() {
    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json {
        init_logging_json();
    } else {
        init_logging_default();
    }
}

/// Resolve a service's settings: TOML file named by `env_key` (or the
/// fallback path), else defaults plus `SERVER_HOST`/`SERVER_PORT` env
/// overrides. The database URL falls back to `DATABASE_URL`, then to
/// the service's own database file.
fn load_config(
    env_key: &str,
    fallback_path: &str,
    default_db_url: &str,
    default_port: u16,
) -> anyhow::Result<configs::AppConfig> {
    let mut cfg = match configs::load_for(env_key, fallback_path) {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            cfg.server.host = env::var("SERVER_HOST").unwrap_or(cfg.server.host);
            cfg.server.port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(default_port);
            cfg
        }
    };
    cfg.database.normalize_from_env();
    cfg.database.or_default_url(default_db_url);
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

async fn serve(cfg: configs::AppConfig, app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry for the task service: config, pool, migrations, serve.
pub async fn run_tasks() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config(
        "TASKS_CONFIG_PATH",
        "tasks.toml",
        "sqlite://tasks.db?mode=rwc",
        8080,
    )?;
    let db = models::db::connect(&cfg.database).await?;
    TaskMigrator::up(&db, None).await?;
    info!(url = %cfg.database.url, "task database ready");

    let app = build_tasks_router(AppState { db });
    serve(cfg, app).await
}

/// Public entry for the shop service: config, pool, migrations, serve.
pub async fn run_shop() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config(
        "SHOP_CONFIG_PATH",
        "shop.toml",
        "sqlite://internet_shop.db?mode=rwc",
        8081,
    )?;
    let db = models::db::connect(&cfg.database).await?;
    ShopMigrator::up(&db, None).await?;
    info!(url = %cfg.database.url, "shop database ready");

    let app = build_shop_router(AppState { db });
    serve(cfg, app).await
}
