#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::FixedOffset;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use wishboard::config::Board;
use wishboard::db::Database;
use wishboard::handler::AppState;
use wishboard::wishes::Wishes;

pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("valid offset")
}

pub async fn open_db(dir: &TempDir) -> Database {
    Database::open(&dir.path().join("wishes.db"), kst())
        .await
        .expect("failed to open database")
}

pub struct TestApp {
    pub app: Router,
    pub db: Arc<Database>,
    _dir: TempDir,
}

impl TestApp {
    pub fn store(&self) -> Wishes<'_> {
        Wishes::new(self.db.connection(), self.db.utc_offset())
    }
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db = Arc::new(open_db(&dir).await);
    let app = wishboard::app(AppState {
        db: db.clone(),
        board: Board::default(),
    });

    TestApp { app, db, _dir: dir }
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json(res: Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not json")
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(app, req).await;
    let status = res.status();
    (status, read_json(res).await)
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("failed to build request");
    let res = send(app, req).await;
    let status = res.status();
    (status, read_json(res).await)
}

pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(app, req).await;
    let status = res.status();
    (status, read_json(res).await)
}
