mod cli;
mod commands;
mod config;
mod output;
mod timing;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::Output;

/// Resolve the effective API settings and build a store for them.
fn open_store(
    file_config: &Config,
    api_url: Option<String>,
    token: Option<String>,
) -> Result<commands::Store> {
    let config = file_config.resolve(api_url, token)?;
    tracing::debug!(users_url = %config.users_url(), "Resolved API configuration");
    Ok(useradmin_business::connect(&config))
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        api_url,
        token,
        ..
    } = cli;
    let file_config = Config::load()?;

    match command {
        Commands::List => commands::run_list(&open_store(&file_config, api_url, token)?).await,
        Commands::Get { id } => {
            commands::run_get(&open_store(&file_config, api_url, token)?, id).await
        }
        Commands::Create(args) => {
            let store = open_store(&file_config, api_url, token)?;
            commands::run_create(&store, &args.into()).await
        }
        Commands::Update { id, fields } => {
            let store = open_store(&file_config, api_url, token)?;
            commands::run_update(&store, id, &fields.into()).await
        }
        Commands::Delete { id, yes } => {
            commands::run_delete(&open_store(&file_config, api_url, token)?, id, yes).await
        }
        Commands::Configure {
            new_api_url,
            new_token,
        } => commands::run_configure(file_config, new_api_url, new_token),
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    if let Err(err) = run(cli).await {
        let out = Output::new();
        out.error(&err);
        for cause in err.chain().skip(1) {
            out.dim(format!("  caused by: {cause}"));
        }
        std::process::exit(1);
    }
}
