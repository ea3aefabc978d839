//! Update user command.

use anyhow::{Result, bail};
use tracing::instrument;
use useradmin_business::{UpdateUserPayload, UserId};

use super::get::print_user;
use super::{Store, store_failure};
use crate::output::Output;

#[instrument(skip(store, patch), name = "update")]
pub async fn run_update(store: &Store, id: UserId, patch: &UpdateUserPayload) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to update: pass at least one field, e.g. --email");
    }

    let out = Output::new();

    match store.update_existing_user(id, patch).await {
        Ok(Some(user)) => {
            out.success(format!("Updated user {id}"));
            print_user(&out, &user);
        }
        Ok(None) => out.success(format!("Updated user {id}")),
        Err(err) => return Err(store_failure(store, err)),
    }

    Ok(())
}
