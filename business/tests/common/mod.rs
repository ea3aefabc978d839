//! Shared helpers for users API / store integration tests.
//!
//! Every test gets its own `MockServer`; the store under test is wired to it
//! through a `BusinessConfig` carrying `TEST_TOKEN`.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use useradmin_business::{BusinessConfig, User, UserId, UserStore, UsersClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

pub const TEST_TOKEN: &str = "test_token";
pub const USERS_PATH: &str = "/api/v1/users";

pub fn user_path(id: u32) -> String {
    format!("{USERS_PATH}/{id}")
}

/// A user as the backend's `UserDTO` would serialize it.
pub fn sample_user(id: u32) -> User {
    User {
        id: UserId(id),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("user{id}@example.com"),
        mobile: format!("555-01{id:02}"),
        user_type: "staff".to_owned(),
    }
}

pub fn user_json(user: &User) -> Value {
    serde_json::to_value(user).expect("User should serialize")
}

/// Mock server plus a store pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub store: UserStore<UsersClient>,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let config = BusinessConfig::new(mock_server.uri()).with_auth_token(TEST_TOKEN);
        let store = useradmin_business::connect(&config);
        Self { mock_server, store }
    }

    pub fn client(&self) -> &UsersClient {
        self.store.api()
    }

    /// Seed the store's list by serving `users` once from the list endpoint.
    pub async fn seed_users(&self, users: &[User]) {
        let guard = Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(users)))
            .expect(1)
            .mount_as_scoped(&self.mock_server)
            .await;

        self.store
            .fetch_users()
            .await
            .expect("seeding users should succeed");
        drop(guard);
    }

    pub async fn mock_list_flat(&self, users: &[User]) {
        self.mount("GET", USERS_PATH, ResponseTemplate::new(200).set_body_json(json!(users)))
            .await;
    }

    pub async fn mock_list_envelope(&self, users: &[User]) {
        let body = json!({
            "status": 200,
            "message": "Users fetched successfully",
            "data": users,
        });
        self.mount("GET", USERS_PATH, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    pub async fn mock_list_body(&self, body: Value) {
        self.mount("GET", USERS_PATH, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    pub async fn mock_list_html(&self, page: &str) {
        self.mount(
            "GET",
            USERS_PATH,
            ResponseTemplate::new(200).set_body_raw(page.to_owned(), "text/html"),
        )
        .await;
    }

    pub async fn mock_get(&self, user: &User) {
        self.mount(
            "GET",
            &user_path(user.id.0),
            ResponseTemplate::new(200).set_body_json(user_json(user)),
        )
        .await;
    }

    pub async fn mock_create(&self, created: &User) {
        self.mount(
            "POST",
            USERS_PATH,
            ResponseTemplate::new(201).set_body_json(user_json(created)),
        )
        .await;
    }

    pub async fn mock_update(&self, id: u32, updated: &User) {
        self.mount(
            "PUT",
            &user_path(id),
            ResponseTemplate::new(200).set_body_json(user_json(updated)),
        )
        .await;
    }

    pub async fn mock_delete(&self, id: u32) {
        self.mount("DELETE", &user_path(id), ResponseTemplate::new(204))
            .await;
    }

    /// Respond to `verb route` with a backend-style `{"error": ...}` body.
    pub async fn mock_error(&self, verb: &str, route: &str, status: u16, error: &str) {
        self.mount(
            verb,
            route,
            ResponseTemplate::new(status).set_body_json(json!({ "error": error })),
        )
        .await;
    }

    /// Respond to `verb route` only after `delay`.
    pub async fn mock_slow(&self, verb: &str, route: &str, delay: Duration) {
        self.mount(
            verb,
            route,
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(delay),
        )
        .await;
    }

    async fn mount(&self, verb: &str, route: &str, response: ResponseTemplate) {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }
}
