use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use test_utils::{
    builder::TestBuilder,
    factory::{
        friendship::create_friendship,
        helpers::create_mutual_friends,
        invitation::create_invitation,
        user::{create_user_with_name, UserFactory},
    },
};

use crate::server::{data::user::DbUserRepository, error::X_STATUS_CODE, router, state::AppState};


/// Application wired to an in-memory database, as `main` wires it to the real one.
struct TestApp {
    app: Router,
    db: DatabaseConnection,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    fn status_code_header(&self) -> Option<&str> {
        self.headers
            .get(X_STATUS_CODE)
            .map(|value| value.to_str().unwrap())
    }
}

impl TestApp {
    async fn new(debug: bool) -> Self {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.unwrap();

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store.migrate().await.unwrap();

        let state = AppState::new(Arc::new(DbUserRepository::new(db.clone())), debug);
        let app = router::app(state, SessionManagerLayer::new(store).with_secure(false));

        Self { app, db }
    }

    /// Sends a form-encoded POST, with the session cookie when given.
    async fn post(&self, uri: &str, form: &str, cookie: Option<&str>) -> TestResponse {
        let mut request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = request.body(Body::from(form.to_string())).unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }

    /// Logs in through `/fakeAuth` and returns the session cookie. Requires a debug app.
    async fn login(&self, user_id: i64) -> String {
        let response = self
            .post("/fakeAuth", &format!("user_id={}", user_id), None)
            .await;
        assert_eq!(response.json()["status"], "Ok");

        let set_cookie = response
            .headers
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();

        set_cookie.split(';').next().unwrap().to_string()
    }
}

fn assert_error(response: &TestResponse, status: &str, message: &str) {
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.status_code_header(), Some("200"));

    let body = response.json();
    assert_eq!(body["status"], status);
    assert_eq!(body["message"], message);
}
