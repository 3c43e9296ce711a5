use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::routes::{build_tasks_router, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db_path = std::env::temp_dir().join(format!("taskshop_e2e_tasks_{}.db", Uuid::new_v4()));
    let cfg = configs::DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", db_path.display()),
        max_connections: 5,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect(&cfg).await?;
    migration::TaskMigrator::up(&db, None).await?;

    let app: Router = build_tasks_router(AppState { db });
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn create_task(
    c: &reqwest::Client,
    base_url: &str,
    title: &str,
) -> anyhow::Result<serde_json::Value> {
    let res = c
        .post(format!("{}/tasks/", base_url))
        .json(&json!({"title": title, "description": "about", "done": false}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json().await?)
}

#[tokio::test]
async fn create_then_get_returns_identical_task() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created = create_task(&c, &app.base_url, "write docs").await?;
    let id = created["id"].as_i64().expect("id");
    assert!(id >= 1);

    let res = c.get(format!("{}/tasks/{}/", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched["title"], "write docs");
    assert_eq!(fetched["done"], false);
    Ok(())
}

#[tokio::test]
async fn done_defaults_to_false_when_omitted() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/tasks/", app.base_url))
        .json(&json!({"title": "no flag", "description": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["done"], false);
    Ok(())
}

#[tokio::test]
async fn update_missing_task_is_404_and_changes_nothing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    create_task(&c, &app.base_url, "survivor").await?;

    let res = c
        .put(format!("{}/tasks/999/", app.base_url))
        .json(&json!({"title": "other", "description": "other", "done": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Task not found");

    let res = c.get(format!("{}/tasks/", app.base_url)).send().await?;
    let list = res.json::<serde_json::Value>().await?;
    let list = list.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "survivor");
    Ok(())
}

#[tokio::test]
async fn update_replaces_all_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created = create_task(&c, &app.base_url, "draft").await?;
    let id = created["id"].as_i64().unwrap();

    let res = c
        .put(format!("{}/tasks/{}/", app.base_url, id))
        .json(&json!({"title": "final", "description": "rewritten", "done": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "final");
    assert_eq!(body["done"], true);
    Ok(())
}

#[tokio::test]
async fn delete_twice_is_ok_then_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created = create_task(&c, &app.base_url, "ephemeral").await?;
    let id = created["id"].as_i64().unwrap();

    let res = c.delete(format!("{}/tasks/{}/", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Task deleted successfully");

    let res = c.delete(format!("{}/tasks/{}/", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn pagination_slices_in_insertion_order() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    create_task(&c, &app.base_url, "first").await?;
    create_task(&c, &app.base_url, "second").await?;

    let res = c
        .get(format!("{}/tasks/?skip=0&limit=1", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let page = res.json::<serde_json::Value>().await?;
    let page = page.as_array().expect("array");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["title"], "first");
    Ok(())
}

#[tokio::test]
async fn negative_pagination_values_are_bad_requests() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    create_task(&c, &app.base_url, "untouched").await?;

    // skip/limit are unsigned; negative values fail query deserialization.
    let res = c
        .get(format!("{}/tasks/?skip=-1", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .get(format!("{}/tasks/?skip=0&limit=-5", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn overlong_title_is_unprocessable() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/tasks/", app.base_url))
        .json(&json!({"title": "x".repeat(101), "description": "", "done": false}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].as_str().unwrap().contains("title"));
    Ok(())
}

#[tokio::test]
async fn member_routes_carry_trailing_slash() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created = create_task(&c, &app.base_url, "slashed").await?;
    let id = created["id"].as_i64().unwrap();

    // Only the slash-terminated member path exists.
    let res = c.get(format!("{}/tasks/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.get(format!("{}/tasks/{}/", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn ops_routes_respond() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");

    let res = c.get(format!("{}/metrics", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("taskshop_requests_total"));

    let res = c
        .get(format!("{}/api-docs/openapi.json", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    assert!(doc["paths"].get("/tasks/").is_some());
    Ok(())
}
