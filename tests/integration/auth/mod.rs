//! End-to-end auth gate tests: tokens issued at login guard the API

use axum::http::{Method, StatusCode};
use chrono::Duration;
use jokebox_auth::{JwtMaker, TokenMaker};
use serde_json::json;

use crate::common::{TestApp, UserFixture};

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_missing_header_is_rejected() {
    let app = TestApp::new().await.unwrap();

    let (status, body) = app.send(Method::GET, "/users/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "authorization is not provided");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_token_signed_with_other_key_is_rejected() {
    let app = TestApp::new().await.unwrap();
    let user = UserFixture::create(&app).await;

    let forger = JwtMaker::new("an-entirely-different-signing-key-0987").unwrap();
    let token = forger
        .create_token(
            user.id as i32,
            &user.username,
            &user.email,
            Duration::minutes(5),
        )
        .unwrap();

    let (status, body) = app
        .send(Method::GET, "/users/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "token is invalid");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_expired_login_token_is_rejected() {
    let app = TestApp::with_token_duration(Duration::seconds(1))
        .await
        .unwrap();
    let user = UserFixture::create(&app).await;

    tokio::time::sleep(std::time::Duration::from_millis(2100)).await;

    let (status, body) = app
        .send(Method::GET, "/users/me", Some(&user.token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "token has expired");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_locally_minted_token_is_accepted() {
    let app = TestApp::new().await.unwrap();
    let user = UserFixture::create(&app).await;

    let maker = JwtMaker::new(&app.config.token_symmetric_key).unwrap();
    let token = maker
        .create_token(
            user.id as i32,
            &user.username,
            &user.email,
            Duration::minutes(5),
        )
        .unwrap();
    let payload = maker.verify_token(&token).unwrap();
    assert_eq!(payload.username, user.username);

    let (status, joke) = app
        .send(
            Method::POST,
            "/jokes",
            Some(&token),
            Some(json!({ "title": "Trust", "text": "I trust this token." })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(joke["author"], user.username);
}
