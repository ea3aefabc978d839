use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use useradmin_business::{CreateUserPayload, UpdateUserPayload, UserId};

#[derive(Parser)]
#[command(name = "useradmin")]
#[command(about = "Manage users of the admin panel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the backend (overrides config file and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token for the API (overrides config file and environment)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all users
    List,
    /// Show a single user
    Get {
        /// User ID
        id: UserId,
    },
    /// Create a new user
    Create(CreateArgs),
    /// Update fields of an existing user
    Update {
        /// User ID
        id: UserId,

        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: UserId,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Save the API address and token to the config file
    Configure {
        /// Base URL of the backend
        #[arg(long = "set-api-url")]
        new_api_url: Option<String>,

        /// Bearer token for the API
        #[arg(long = "set-token")]
        new_token: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub middle_name: Option<String>,

    #[arg(long)]
    pub last_name: String,

    #[arg(long, short = 'e')]
    pub email: String,

    #[arg(long, short = 'm')]
    pub mobile: String,

    /// Role of the user, e.g. admin or staff
    #[arg(long, short = 't')]
    pub user_type: String,

    #[arg(long, short = 'u')]
    pub username: Option<String>,

    #[arg(long, short = 'p')]
    pub password: Option<String>,
}

impl From<CreateArgs> for CreateUserPayload {
    fn from(args: CreateArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            mobile: args.mobile,
            user_type: args.user_type,
            middle_name: args.middle_name,
            username: args.username,
            password: args.password,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long, short = 'e')]
    pub email: Option<String>,

    #[arg(long, short = 'm')]
    pub mobile: Option<String>,

    #[arg(long, short = 't')]
    pub user_type: Option<String>,

    #[arg(long, short = 'p')]
    pub password: Option<String>,
}

impl From<UpdateArgs> for UpdateUserPayload {
    fn from(args: UpdateArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            mobile: args.mobile,
            user_type: args.user_type,
            password: args.password,
        }
    }
}
