//! Registration, sign-in and session cookie handling.

mod common;

use awe_core::session::COOKIE_NAME;
use axum::http::StatusCode;
use common::{
    body_json, body_text, create_user, get, get_with_cookie, post_json, set_cookie, DIGEST,
};
use serde_json::json;
use sqlx::PgPool;

/// `name=value` part of a `Set-Cookie` header, usable as a `Cookie` header.
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_creates_user_and_signs_in(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/users",
        json!({ "name": " Alice ", "email": "Alice@Example.com", "passwd": DIGEST }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response).expect("registration should set a cookie");
    assert!(cookie.starts_with(&format!("{COOKIE_NAME}=")));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["passwd"], "******");
    assert_eq!(json["admin"], false);
    assert!(json["image"]
        .as_str()
        .unwrap()
        .starts_with("https://www.gravatar.com/avatar/"));
    assert!(!json["id"].as_str().unwrap().contains('-'));

    // The issued cookie identifies the new user on the next request.
    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/signin", &cookie_pair(&cookie)).await;
    assert!(body_text(response).await.contains("Alice"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_duplicate_email(pool: PgPool) {
    create_user(&pool, "bob@example.com", false).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/users",
        json!({ "name": "Bob", "email": "bob@example.com", "passwd": DIGEST }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "register:failed");
    assert_eq!(json["data"], "email");
    assert_eq!(json["message"], "Email is already in use.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_validates_each_field(pool: PgPool) {
    let cases = [
        (json!({ "name": "  ", "email": "a@example.com", "passwd": DIGEST }), "name"),
        (json!({ "name": "A", "email": "not-an-email", "passwd": DIGEST }), "email"),
        (json!({ "name": "A", "email": "a@example.com", "passwd": "plaintext" }), "passwd"),
        (json!({ "email": "a@example.com", "passwd": DIGEST }), "name"),
    ];

    for (body, field) in cases {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/users", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "value:invalid");
        assert_eq!(json["data"], field);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_overlong_name_and_email(pool: PgPool) {
    let long_email = format!("{}@example.com", "a".repeat(45));
    let cases = [
        (json!({ "name": "N".repeat(60), "email": "n@example.com", "passwd": DIGEST }), "name"),
        (json!({ "name": "N", "email": long_email, "passwd": DIGEST }), "email"),
    ];

    for (body, field) in cases {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/users", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "value:invalid");
        assert_eq!(json["data"], field);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn user_listing_masks_every_password(pool: PgPool) {
    create_user(&pool, "first@example.com", false).await;
    create_user(&pool, "second@example.com", true).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["page"]["item_count"], 2);
    let users = json["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert_eq!(user["passwd"], "******");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn authenticate_with_correct_digest(pool: PgPool) {
    let user = create_user(&pool, "carol@example.com", false).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/authenticate",
        json!({ "email": "carol@example.com", "passwd": DIGEST }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response).expect("sign-in should set a cookie");
    assert!(cookie.contains(&user.id));
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["passwd"], "******");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn authenticate_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/authenticate",
        json!({ "email": "nobody@example.com", "passwd": DIGEST }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["data"], "email");
    assert_eq!(json["message"], "Email not exist.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn authenticate_wrong_digest(pool: PgPool) {
    create_user(&pool, "dave@example.com", false).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/authenticate",
        json!({ "email": "dave@example.com", "passwd": "0".repeat(40) }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookie(&response).is_none());
    let json = body_json(response).await;
    assert_eq!(json["data"], "passwd");
    assert_eq!(json["message"], "Invalid password.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn authenticate_requires_both_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/authenticate", json!({ "passwd": DIGEST })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["data"], "email");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/authenticate",
        json!({ "email": "erin@example.com", "passwd": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["data"], "passwd");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signout_clears_cookie_and_returns_to_referer(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/signout").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()["location"], "/");
    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.starts_with(&format!("{COOKIE_NAME}=-deleted-")));
    assert!(cookie.contains("Max-Age=0"));

    let app = common::build_test_app(pool);
    let request = axum::http::Request::builder()
        .uri("/signout")
        .header("referer", "/blog/abc")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.headers()["location"], "/blog/abc");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn forged_or_expired_cookies_are_anonymous(pool: PgPool) {
    let admin = create_user(&pool, "root@example.com", true).await;
    let codec = common::codec();

    let expired = codec.encode_with_ttl(&admin.id, &admin.passwd, -60);
    let wrong_secret = codec.encode(&admin.id, "not-the-stored-hash");
    let unknown_user = codec.encode("000000000000000nobody000", &admin.passwd);

    for token in [expired, wrong_secret, unknown_user, "garbage".to_string()] {
        let app = common::build_test_app(pool.clone());
        let cookie = format!("{COOKIE_NAME}={token}");
        let response = get_with_cookie(app, "/manage/users", &cookie).await;
        assert_eq!(response.status(), StatusCode::FOUND, "token {token:?}");
        assert_eq!(response.headers()["location"], "/signin");
    }
}
