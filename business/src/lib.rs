//! Business layer of the user admin panel: a typed client for the users REST
//! resource and a client-side store that caches and reconciles its results.

mod config;
mod error;
pub mod http;
pub mod users;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL, ENV_PREFIX};
pub use error::{ApiResult, UsersError};
pub use users::{
    CreateUserPayload, ListUsersResponse, UpdateUserPayload, User, UserId, UserList, UserStore,
    UsersApi, UsersClient, UsersEnvelope,
};

/// Build a store wired to the HTTP client for `config`.
pub fn connect(config: &BusinessConfig) -> UserStore<UsersClient> {
    UserStore::new(UsersClient::new(config))
}
