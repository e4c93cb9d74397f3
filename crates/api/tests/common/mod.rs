#![allow(dead_code)]

use awe_api::auth::password::hash_password;
use awe_api::auth::session::SessionConfig;
use awe_api::config::ServerConfig;
use awe_api::router::build_app_router;
use awe_api::state::AppState;
use awe_core::session::{SessionCodec, COOKIE_NAME};
use awe_core::types::next_id;
use awe_db::models::user::{CreateUser, User};
use awe_db::repositories::UserRepo;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const SESSION_SECRET: &str = "test-session-secret";

/// Client-side digest used for every test account.
pub const DIGEST: &str = "3da541559918a808c2402bba5012f6c60b27661c";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:9000".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: SESSION_SECRET.to_string(),
            max_age_secs: 86_400,
        },
    }
}

/// The production router and middleware stack over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone()).expect("templates should compile");
    build_app_router(state, &config)
}

pub fn codec() -> SessionCodec {
    test_config().session.codec()
}

/// Insert a user whose password digest is [`DIGEST`].
pub async fn create_user(pool: &PgPool, email: &str, admin: bool) -> User {
    let id = next_id();
    let passwd = hash_password(&id, DIGEST).expect("hashing should succeed");
    let input = CreateUser {
        id,
        email: email.to_string(),
        passwd,
        admin,
        name: email.split('@').next().unwrap_or(email).to_string(),
        image: "about:blank".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// A `Cookie` header value carrying a valid session for `user`.
///
/// `user` must be the unredacted row so the signature uses the stored hash.
pub fn cookie_for(user: &User) -> String {
    format!("{COOKIE_NAME}={}", codec().encode(&user.id, &user.passwd))
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(cookie), Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

/// The `Set-Cookie` header of a response, if any.
pub fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
