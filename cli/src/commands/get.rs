//! Show a single user.

use anyhow::Result;
use tracing::instrument;
use useradmin_business::{User, UserId};

use super::{Store, store_failure};
use crate::output::Output;

pub(crate) fn print_user(out: &Output, user: &User) {
    out.header(user.full_name());
    out.labeled("ID", user.id);
    out.labeled("Email", &user.email);
    out.labeled("Mobile", &user.mobile);
    out.labeled("Type", &user.user_type);
}

#[instrument(skip(store), name = "get")]
pub async fn run_get(store: &Store, id: UserId) -> Result<()> {
    let out = Output::new();

    match store.fetch_user_by_id(id).await {
        Ok(Some(user)) => print_user(&out, &user),
        Ok(None) => out.warning(format!("Server returned no body for user {id}")),
        Err(err) if err.is_not_found() => {
            return Err(store_failure(store, err).context(format!("User {id} not found")));
        }
        Err(err) => return Err(store_failure(store, err)),
    }

    Ok(())
}
