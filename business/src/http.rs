//! Platform-abstracted HTTP transport with Send-safe futures.
//!
//! The users API only describes requests (method, URL, headers, body); this
//! module is what actually puts them on the wire.
//!
//! - On **native**: requests go through one shared `reqwest::Client`.
//! - On **WASM**: `reqwest::Response` holds JS values and is not `Send`, so the
//!   request runs on the JS thread via `wasm_bindgen_futures::spawn_local` and
//!   the result comes back through a `flume` channel.
//!
//! Either way `RequestBuilder::send` returns a `Send` future, which lets the
//! `UsersApi` trait keep `Send` futures on every target.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Error body returned by the backend on 4xx/5xx, e.g. `{"error": "User not found"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// True when the body carries no payload (204, or whitespace only).
    pub fn is_empty_body(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The server's `error` message, if the body is a JSON error object.
    pub fn error_message(&self) -> Option<String> {
        self.json::<ErrorBody>().ok().map(|b| b.error)
    }
}

/// Transport-level failure (connection refused, DNS, TLS, body read...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP error: {}", self.message)
    }
}

impl std::error::Error for HttpError {}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A request descriptor: everything needed to perform one call.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get a previously set header (exact name match).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach `Authorization: Bearer <token>` when a token is present.
    pub fn bearer_auth(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.header("authorization", format!("Bearer {token}")),
            None => self,
        }
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        let json_bytes = serde_json::to_vec(value)?;
        self.body = Some(json_bytes);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    /// Send the request.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(&shared_client(), self).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        // flume channels are Send-safe, so awaiting the receiver keeps this future Send.
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(&reqwest::Client::new(), self).await;
            // The receiver may already be gone if the caller dropped the action.
            drop(tx.send_async(result).await);
        });

        rx.recv_async()
            .await
            .map_err(|_closed| HttpError::new("Request cancelled"))?
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn shared_client() -> reqwest::Client {
    use std::sync::LazyLock;

    static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);
    // reqwest::Client is an Arc internally; cloning shares the connection pool.
    CLIENT.clone()
}

async fn execute(client: &reqwest::Client, request: RequestBuilder) -> HttpResult<Response> {
    let RequestBuilder {
        method,
        url,
        headers,
        body,
    } = request;

    let mut builder = match method {
        Method::Get => client.get(&url),
        Method::Post => client.post(&url),
        Method::Put => client.put(&url),
        Method::Delete => client.delete(&url),
    };

    for (name, value) in &headers {
        builder = builder.header(name, value);
    }

    if let Some(body) = body {
        builder = builder.body(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    // Extract status and headers before consuming the response
    let status = response.status().as_u16();
    let mut response_headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(v) = value.to_str() {
            response_headers.insert(name.as_str().to_lowercase(), v.to_owned());
        }
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response {
        status,
        headers: response_headers,
        body,
    })
}

/// Entry point for building request descriptors.
///
/// ```ignore
/// use useradmin_business::http::Client;
///
/// let response = Client::get("http://localhost:8080/api/v1/users")
///     .bearer_auth(Some("token"))
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Delete, url)
    }
}
