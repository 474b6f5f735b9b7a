//! User endpoint integration tests
//!
//! - POST /users, POST /users/login
//! - GET /users/verify/email, GET /users
//! - GET /users/me, PUT /users/{password,fullname,status,bio}
//! - DELETE /users

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{TestApp, UserFixture};

mod test_registration {
    use super::*;

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_register_returns_profile_without_hash() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;

        let (status, me) = app
            .send(Method::GET, "/users/me", Some(&user.token), None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["id"], user.id);
        assert_eq!(me["username"], user.username);
        assert_eq!(me["email"], user.email);
        assert!(me.get("hashed_password").is_none());
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_duplicate_email_conflicts() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;

        let (status, body) = app
            .send(
                Method::POST,
                "/users",
                None,
                Some(json!({
                    "username": format!("{}x", user.username),
                    "email": user.email,
                    "password": "another password",
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_verify_email() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;

        let (status, body) = app
            .send(
                Method::GET,
                &format!("/users/verify/email?email={}", user.email),
                None,
                None,
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "email is registered already");

        let (status, body) = app
            .send(
                Method::GET,
                "/users/verify/email?email=nobody-here@example.com",
                None,
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "email is not registered yet");
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_list_users_respects_size() {
        let app = TestApp::new().await.unwrap();
        UserFixture::create(&app).await;
        UserFixture::create(&app).await;

        let (status, body) = app
            .send(Method::GET, "/users?first=0&size=1", None, None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_login_returns_bearer_token() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;

        let (status, body) = app
            .send(
                Method::POST,
                "/users/login",
                None,
                Some(json!({ "email": user.email, "password": user.password })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["token_type"], "bearer");
        assert!(!body["access_token"].as_str().unwrap().is_empty());
        assert_eq!(body["user"]["username"], user.username);
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_login_wrong_password() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;

        let (status, _) = app
            .send(
                Method::POST,
                "/users/login",
                None,
                Some(json!({ "email": user.email, "password": "wrong password" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_login_unknown_email() {
        let app = TestApp::new().await.unwrap();

        let (status, _) = app
            .send(
                Method::POST,
                "/users/login",
                None,
                Some(json!({ "email": "ghost@example.com", "password": "whatever" })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_account {
    use super::*;

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_update_profile_fields() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;

        let (status, body) = app
            .send(
                Method::PUT,
                "/users/fullname",
                Some(&user.token),
                Some(json!({ "fullname": "Groucho Marx" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fullname"], "Groucho Marx");

        let (status, body) = app
            .send(
                Method::PUT,
                "/users/status",
                Some(&user.token),
                Some(json!({ "status": "telling jokes" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "telling jokes");

        let (status, body) = app
            .send(
                Method::PUT,
                "/users/bio",
                Some(&user.token),
                Some(json!({ "bio": "I refuse to join any club that would have me." })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bio"], "I refuse to join any club that would have me.");
        assert_eq!(body["fullname"], "Groucho Marx");
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_change_password() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;

        let (status, _) = app
            .send(
                Method::PUT,
                "/users/password",
                Some(&user.token),
                Some(json!({ "old_password": "not my password", "new_password": "brand new secret" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .send(
                Method::PUT,
                "/users/password",
                Some(&user.token),
                Some(json!({ "old_password": user.password, "new_password": "brand new secret" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app
            .send(
                Method::POST,
                "/users/login",
                None,
                Some(json!({ "email": user.email, "password": "brand new secret" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_delete_account_removes_jokes() {
        let app = TestApp::new().await.unwrap();
        let user = UserFixture::create(&app).await;
        let joke_id = user.publish_joke(&app, "Parting words").await;

        let (status, _) = app
            .send(
                Method::DELETE,
                "/users",
                Some(&user.token),
                Some(json!({ "password": "wrong password" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app
            .send(
                Method::DELETE,
                "/users",
                Some(&user.token),
                Some(json!({ "password": user.password })),
            )
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = app
            .send(Method::GET, &format!("/jokes/{}", joke_id), None, None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Token still verifies but the account is gone
        let (status, _) = app
            .send(Method::GET, "/users/me", Some(&user.token), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
