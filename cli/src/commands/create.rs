//! Create user command.

use anyhow::Result;
use tracing::instrument;
use useradmin_business::CreateUserPayload;

use super::get::print_user;
use super::{Store, store_failure};
use crate::output::Output;

#[instrument(skip_all, name = "create")]
pub async fn run_create(store: &Store, payload: &CreateUserPayload) -> Result<()> {
    let out = Output::new();

    match store.create_new_user(payload).await {
        Ok(Some(user)) => {
            out.success(format!("Created user {}", user.id));
            print_user(&out, &user);
        }
        Ok(None) => out.success("User created"),
        Err(err) => return Err(store_failure(store, err)),
    }

    Ok(())
}
