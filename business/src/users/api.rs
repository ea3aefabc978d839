//! Users API client.
//!
//! Each operation builds a request descriptor against `{base}/api/v1/users`
//! and hands it to [`crate::http`]. Responses are decoded but not interpreted:
//! reconciling them into local state is the store's job.
//!
//! Notes:
//! - No retry, no timeout, no validation of ids or payloads.
//! - Any 2xx is success (create answers 201, delete answers 204).
//! - A bearer token is attached when one is configured.

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use ustr::Ustr;

use crate::BusinessConfig;
use crate::error::{ApiResult, UsersError};
use crate::http::{Client, RequestBuilder, Response};
use crate::users::types::{CreateUserPayload, ListUsersResponse, UpdateUserPayload, User, UserId};

/// The five CRUD calls the store depends on.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// GET `/api/v1/users`
    async fn fetch_all_users(&self) -> ApiResult<ListUsersResponse>;

    /// GET `/api/v1/users/{id}`
    async fn fetch_user_by_id(&self, id: UserId) -> ApiResult<Option<User>>;

    /// POST `/api/v1/users`
    async fn create_user(&self, payload: &CreateUserPayload) -> ApiResult<Option<User>>;

    /// PUT `/api/v1/users/{id}`
    async fn update_user(&self, id: UserId, payload: &UpdateUserPayload)
    -> ApiResult<Option<User>>;

    /// DELETE `/api/v1/users/{id}`
    async fn delete_user(&self, id: UserId) -> ApiResult<()>;
}

/// HTTP implementation of [`UsersApi`].
#[derive(Debug, Clone)]
pub struct UsersClient {
    users_url: Ustr,
    auth_token: Option<String>,
}

impl UsersClient {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            users_url: config.users_url(),
            auth_token: config.auth_token.clone(),
        }
    }

    pub fn users_url(&self) -> &str {
        self.users_url.as_str()
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.users_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.auth_token.as_deref())
    }

    pub fn list_request(&self) -> RequestBuilder {
        self.authorize(Client::get(self.users_url.as_str()))
    }

    pub fn get_request(&self, id: UserId) -> RequestBuilder {
        self.authorize(Client::get(self.user_url(id)))
    }

    pub fn create_request(&self, payload: &CreateUserPayload) -> ApiResult<RequestBuilder> {
        self.authorize(Client::post(self.users_url.as_str()))
            .json(payload)
            .map_err(|e| UsersError::Encode(e.to_string()))
    }

    pub fn update_request(
        &self,
        id: UserId,
        payload: &UpdateUserPayload,
    ) -> ApiResult<RequestBuilder> {
        self.authorize(Client::put(self.user_url(id)))
            .json(payload)
            .map_err(|e| UsersError::Encode(e.to_string()))
    }

    pub fn delete_request(&self, id: UserId) -> RequestBuilder {
        self.authorize(Client::delete(self.user_url(id)))
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    debug!("{} {}", request.method(), request.url());

    let response = request.send().await?;

    if !response.is_success() {
        return Err(UsersError::Status {
            status: response.status,
            message: response.error_message(),
        });
    }

    Ok(response)
}

fn decode<T: DeserializeOwned>(response: &Response, what: &'static str) -> ApiResult<T> {
    response.json().map_err(|e| UsersError::Decode {
        what,
        reason: e.to_string(),
    })
}

/// Empty body or `null` decodes to `None`.
fn decode_optional<T: DeserializeOwned>(
    response: &Response,
    what: &'static str,
) -> ApiResult<Option<T>> {
    if response.is_empty_body() {
        return Ok(None);
    }
    decode(response, what)
}

/// Any 2xx list body is accepted; what is not JSON at all (an HTML maintenance
/// page, an empty body) is kept as an unrecognized string.
fn decode_list(response: &Response) -> ListUsersResponse {
    response.json().unwrap_or_else(|err| {
        warn!(
            "Users list body is not JSON (content-type: {}): {err}",
            response.header("content-type").unwrap_or("unknown")
        );
        ListUsersResponse::Unrecognized(Value::String(
            String::from_utf8_lossy(&response.body).into_owned(),
        ))
    })
}

#[async_trait]
impl UsersApi for UsersClient {
    async fn fetch_all_users(&self) -> ApiResult<ListUsersResponse> {
        let response = send(self.list_request()).await?;
        Ok(decode_list(&response))
    }

    async fn fetch_user_by_id(&self, id: UserId) -> ApiResult<Option<User>> {
        let response = send(self.get_request(id)).await?;
        decode_optional(&response, "User")
    }

    async fn create_user(&self, payload: &CreateUserPayload) -> ApiResult<Option<User>> {
        let response = send(self.create_request(payload)?).await?;
        decode_optional(&response, "User")
    }

    async fn update_user(
        &self,
        id: UserId,
        payload: &UpdateUserPayload,
    ) -> ApiResult<Option<User>> {
        let response = send(self.update_request(id, payload)?).await?;
        decode_optional(&response, "User")
    }

    async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        send(self.delete_request(id)).await?;
        Ok(())
    }
}
