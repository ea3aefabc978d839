//! Users domain module.
//!
//! This module is the single home for:
//! - wire types for the `/api/v1/users` resource
//! - the API client that performs network IO against it
//! - the store that caches results and reconciles them after writes
//!
//! Front ends (the CLI, a web build) should only read store state and call its actions.

pub mod api;
pub mod store;
pub mod types;

pub use api::{UsersApi, UsersClient};
pub use store::UserStore;
pub use types::{
    CreateUserPayload, ListUsersResponse, UpdateUserPayload, User, UserId, UserList, UsersEnvelope,
};
