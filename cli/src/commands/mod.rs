//! Command implementations for the user admin CLI.
//!
//! Each subcommand lives in its own module and drives the shared [`Store`].

pub mod completions;
pub mod configure;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use completions::generate_completions;
pub use configure::run_configure;
pub use create::run_create;
pub use delete::run_delete;
pub use get::run_get;
pub use list::run_list;
pub use update::run_update;

use useradmin_business::{UserStore, UsersApi, UsersClient, UsersError};

pub type Store = UserStore<UsersClient>;

/// Wrap a failed store action so that its top-level message is the one the
/// store recorded for display.
fn store_failure<A: UsersApi>(store: &UserStore<A>, err: UsersError) -> anyhow::Error {
    let detail = err.to_string();
    match store.error() {
        Some(message) if message != detail => anyhow::Error::new(err).context(message),
        _ => anyhow::Error::new(err),
    }
}
