//! Delete user command.

use std::io::IsTerminal as _;

use anyhow::{Context as _, Result, bail};
use inquire::Confirm;
use tracing::instrument;
use useradmin_business::UserId;

use super::{Store, store_failure};
use crate::output::Output;

#[instrument(skip(store), name = "delete")]
pub async fn run_delete(store: &Store, id: UserId, yes: bool) -> Result<()> {
    let out = Output::new();

    if !yes {
        if !std::io::stdin().is_terminal() {
            bail!("Refusing to delete user {id} without confirmation; pass --yes");
        }

        let confirmed = Confirm::new(&format!("Delete user {id}?"))
            .with_default(false)
            .prompt()
            .context("Failed to confirm")?;

        if !confirmed {
            out.dim("Cancelled.");
            return Ok(());
        }
    }

    if let Err(err) = store.remove_user(id).await {
        return Err(store_failure(store, err));
    }

    out.success(format!("Deleted user {id}"));
    Ok(())
}
