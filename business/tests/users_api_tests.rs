//! Users API client against a mock backend.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{TestContext, USERS_PATH, sample_user, user_path};
use serde_json::json;
use useradmin_business::{
    BusinessConfig, CreateUserPayload, ListUsersResponse, UpdateUserPayload, UserId, UsersApi,
    UsersClient, UsersError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[tokio::test]
async fn test_fetch_all_users_returns_body_uninterpreted() {
    let ctx = TestContext::new().await;
    ctx.mock_list_envelope(&[sample_user(1)]).await;

    let response = ctx.client().fetch_all_users().await.unwrap();

    assert!(matches!(response, ListUsersResponse::Envelope(_)));
}

#[tokio::test]
async fn test_fetch_user_by_id() {
    let ctx = TestContext::new().await;
    ctx.mock_get(&sample_user(5)).await;

    let user = ctx.client().fetch_user_by_id(UserId(5)).await.unwrap();

    assert_eq!(user, Some(sample_user(5)));
}

#[tokio::test]
async fn test_fetch_unknown_user_surfaces_not_found() {
    let ctx = TestContext::new().await;
    ctx.mock_error("GET", &user_path(404), 404, "User not found")
        .await;

    let err = ctx.client().fetch_user_by_id(UserId(404)).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err,
        UsersError::Status {
            status: 404,
            message: Some("User not found".to_owned()),
        }
    );
}

#[tokio::test]
async fn test_create_user_posts_payload() {
    let server = MockServer::start().await;
    let payload = CreateUserPayload {
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: "grace@example.com".to_owned(),
        mobile: "555-0199".to_owned(),
        user_type: "admin".to_owned(),
        password: Some("hunter22".to_owned()),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .and(body_json(json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "mobile": "555-0199",
            "user_type": "admin",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "mobile": "555-0199",
            "user_type": "admin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = UsersClient::new(&BusinessConfig::new(server.uri()));
    let created = client.create_user(&payload).await.unwrap().unwrap();

    assert_eq!(created.id, UserId(9));
    assert_eq!(created.full_name(), "Grace Hopper");
}

#[tokio::test]
async fn test_update_user_sends_only_set_fields() {
    let server = MockServer::start().await;
    let mut updated = sample_user(2);
    updated.email = "changed@example.com".to_owned();

    Mock::given(method("PUT"))
        .and(path(user_path(2)))
        .and(body_json(json!({ "email": "changed@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(updated)))
        .expect(1)
        .mount(&server)
        .await;

    let client = UsersClient::new(&BusinessConfig::new(server.uri()));
    let payload = UpdateUserPayload {
        email: Some("changed@example.com".to_owned()),
        ..Default::default()
    };
    let result = client.update_user(UserId(2), &payload).await.unwrap();

    assert_eq!(result, Some(updated));
}

#[tokio::test]
async fn test_null_body_decodes_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path(3)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let client = UsersClient::new(&BusinessConfig::new(server.uri()));

    assert_eq!(client.fetch_user_by_id(UserId(3)).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_user_accepts_no_content() {
    let ctx = TestContext::new().await;
    ctx.mock_delete(4).await;

    ctx.client().delete_user(UserId(4)).await.unwrap();
}

#[tokio::test]
async fn test_malformed_user_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path(1)))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = UsersClient::new(&BusinessConfig::new(server.uri()));
    let err = client.fetch_user_by_id(UserId(1)).await.unwrap_err();

    assert!(matches!(err, UsersError::Decode { what: "User", .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = UsersClient::new(&BusinessConfig::new(format!("http://{addr}")));

    let err = client.fetch_all_users().await.unwrap_err();

    assert!(matches!(err, UsersError::Transport(_)));
}
