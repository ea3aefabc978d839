//! List users command.

use anyhow::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;
use useradmin_business::User;

use super::{Store, store_failure};
use crate::output::Output;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Mobile")]
    mobile: String,
    #[tabled(rename = "Type")]
    user_type: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: truncate_str(&user.full_name(), 28),
            email: truncate_str(&user.email, 32),
            mobile: user.mobile.clone(),
            user_type: user.user_type.clone(),
        }
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    } else {
        s.to_owned()
    }
}

fn render_table(users: &[User]) -> String {
    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

#[instrument(skip_all, name = "list")]
pub async fn run_list(store: &Store) -> Result<()> {
    let out = Output::new();

    if let Err(err) = store.fetch_users().await {
        return Err(store_failure(store, err));
    }

    // A 2xx with an unrecognized body still leaves a message behind.
    if let Some(warning) = store.error() {
        out.warning(warning);
        return Ok(());
    }

    let users = store.users();
    if users.is_empty() {
        out.dim("No users found.");
        return Ok(());
    }

    out.newline();
    out.print(render_table(&users));
    out.total("Total", users.len());
    if let Some(fetched_at) = store.last_fetch() {
        out.dim(format!("Fetched at {}", fetched_at.format("%Y-%m-%d %H:%M:%S UTC")));
    }

    Ok(())
}
