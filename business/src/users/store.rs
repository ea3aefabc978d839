//! Client-side user store.
//!
//! Holds the last fetched user list, the user being viewed, a coarse
//! `loading` flag and a display error, shared between clones of the store.
//! Every action:
//! - raises `loading` for the duration of its one network call,
//! - reconciles local state only when the call succeeds,
//! - on failure records a display string in `error` and returns the original error.
//!
//! `error` is only ever cleared by [`UserStore::clear_error`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::error::{ApiResult, UsersError};
use crate::users::api::UsersApi;
use crate::users::types::{CreateUserPayload, UpdateUserPayload, User, UserId, UserList};

pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user";
pub const CREATE_USER_FAILED: &str = "Failed to create user";
pub const UPDATE_USER_FAILED: &str = "Failed to update user";
pub const DELETE_USER_FAILED: &str = "Failed to delete user";
pub const NO_USERS_IN_RESPONSE: &str = "No users found in response";

#[derive(Debug, Default)]
struct StoreState {
    users: UserList,
    current_user: Option<User>,
    loading: bool,
    error: Option<String>,
    last_fetch: Option<DateTime<Utc>>,
}

/// Raises `loading` on creation and lowers it on drop, including when the
/// action's future is dropped mid-request.
///
/// Only holds the lock for the flag writes, never across an `.await`.
struct LoadingGuard<'a> {
    state: &'a RwLock<StoreState>,
}

impl<'a> LoadingGuard<'a> {
    fn hold(state: &'a RwLock<StoreState>) -> Self {
        write_state(state).loading = true;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        write_state(self.state).loading = false;
    }
}

// Every write is a plain field assignment, so a poisoned lock is still consistent.
fn read_state(state: &RwLock<StoreState>) -> RwLockReadGuard<'_, StoreState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_state(state: &RwLock<StoreState>) -> RwLockWriteGuard<'_, StoreState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to the user list and its request flags.
///
/// Clones share the same state, so one clone can drive an action while
/// another (a UI, a progress reporter) reads `is_loading()` and the cached
/// users. Overlapping actions are not serialized: each writes its own result
/// when it settles and the last one wins.
#[derive(Debug)]
pub struct UserStore<A> {
    api: Arc<A>,
    state: Arc<RwLock<StoreState>>,
}

impl<A> Clone for UserStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: UsersApi> UserStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    // =====================
    // Getters
    // =====================

    /// Snapshot of the cached list, in server order.
    pub fn users(&self) -> UserList {
        self.read().users.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().current_user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Time of the last successful list refresh.
    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.read().last_fetch
    }

    pub fn find_user(&self, id: UserId) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // =====================
    // Actions
    // =====================

    /// Refresh `users` from the server.
    ///
    /// A body that is neither a bare list nor an envelope with `data` leaves
    /// `users` untouched and sets `error` without failing the call.
    pub async fn fetch_users(&self) -> ApiResult<()> {
        info!("UserStore: fetching users");

        let result = {
            let _loading = LoadingGuard::hold(&self.state);
            self.api.fetch_all_users().await
        };
        let response = self.settle(result, FETCH_USERS_FAILED)?;

        let mut state = self.write();
        match response.into_users() {
            Some(users) => {
                info!("UserStore: fetched {} users", users.len());
                state.users = users;
                state.last_fetch = Some(Utc::now());
            }
            None => {
                warn!("UserStore: unexpected response format for user list");
                state.error = Some(NO_USERS_IN_RESPONSE.to_owned());
            }
        }
        Ok(())
    }

    /// Fetch one user and make it the current user.
    pub async fn fetch_user_by_id(&self, id: UserId) -> ApiResult<Option<User>> {
        info!("UserStore: fetching user {id}");

        let result = {
            let _loading = LoadingGuard::hold(&self.state);
            self.api.fetch_user_by_id(id).await
        };
        let user = self.settle(result, FETCH_USER_FAILED)?;

        if let Some(user) = &user {
            self.write().current_user = Some(user.clone());
        }
        Ok(user)
    }

    /// Create a user and append it to `users`.
    pub async fn create_new_user(&self, payload: &CreateUserPayload) -> ApiResult<Option<User>> {
        info!("UserStore: creating user {}", payload.email);

        let result = {
            let _loading = LoadingGuard::hold(&self.state);
            self.api.create_user(payload).await
        };
        let created = self.settle(result, CREATE_USER_FAILED)?;

        if let Some(user) = &created {
            info!("UserStore: created user {}", user.id);
            self.write().users.push(user.clone());
        }
        Ok(created)
    }

    /// Update a user and replace the local copies that share its id.
    ///
    /// Ids not present locally leave `users` unchanged.
    pub async fn update_existing_user(
        &self,
        id: UserId,
        payload: &UpdateUserPayload,
    ) -> ApiResult<Option<User>> {
        info!("UserStore: updating user {id}");

        let result = {
            let _loading = LoadingGuard::hold(&self.state);
            self.api.update_user(id, payload).await
        };
        let updated = self.settle(result, UPDATE_USER_FAILED)?;

        if let Some(user) = &updated {
            let mut state = self.write();
            if let Some(slot) = state.users.iter_mut().find(|u| u.id == id) {
                *slot = user.clone();
            }
            if state.current_user.as_ref().is_some_and(|u| u.id == id) {
                state.current_user = Some(user.clone());
            }
        }
        Ok(updated)
    }

    /// Delete a user remotely, then drop it from local state.
    pub async fn remove_user(&self, id: UserId) -> ApiResult<()> {
        info!("UserStore: deleting user {id}");

        let result = {
            let _loading = LoadingGuard::hold(&self.state);
            self.api.delete_user(id).await
        };
        self.settle(result, DELETE_USER_FAILED)?;

        let mut state = self.write();
        state.users.retain(|u| u.id != id);
        if state.current_user.as_ref().is_some_and(|u| u.id == id) {
            state.current_user = None;
        }
        Ok(())
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        read_state(&self.state)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        write_state(&self.state)
    }

    /// Record a failed call in `error` and pass the error through.
    fn settle<T>(&self, result: ApiResult<T>, fallback: &str) -> ApiResult<T> {
        result.inspect_err(|err| {
            let message = display_message(err, fallback);
            error!("UserStore: {fallback}: {message}");
            self.write().error = Some(message);
        })
    }
}

fn display_message(err: &UsersError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_guard_raises_then_resets() {
        let state = RwLock::new(StoreState::default());
        {
            let _guard = LoadingGuard::hold(&state);
            assert!(read_state(&state).loading);
        }
        assert!(!read_state(&state).loading);
    }

    #[test]
    fn test_display_message_falls_back_when_empty() {
        let err = UsersError::Transport(String::new());
        assert_eq!(display_message(&err, CREATE_USER_FAILED), CREATE_USER_FAILED);

        let err = UsersError::Transport("boom".to_owned());
        assert_eq!(display_message(&err, CREATE_USER_FAILED), "boom");
    }
}
