//! City Insights admin console on the command line.

use std::process::ExitCode;

use admin_core::ClientConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod context;
mod render;

use context::AppContext;

#[derive(Parser)]
#[command(name = "admin")]
#[command(about = "City Insights admin console")]
#[command(version)]
struct Cli {
    /// Run in quiet mode (non-interactive; destructive actions need --yes)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Override ADMIN_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show who is logged in and what they may do
    Whoami,

    /// Site-wide totals (admin only)
    Dashboard,

    /// Post categories
    #[command(subcommand)]
    Categories(cmd::categories::CategoryCommand),

    /// Blog posts
    #[command(subcommand)]
    Posts(cmd::posts::PostCommand),

    /// Advertisements
    #[command(subcommand)]
    Ads(cmd::ads::AdCommand),

    /// Registered users
    #[command(subcommand)]
    Users(cmd::users::UserCommand),

    /// Staff accounts and roles
    #[command(subcommand)]
    Permissions(cmd::permissions::PermissionCommand),

    /// Publisher applications
    #[command(subcommand)]
    RoleRequests(cmd::role_requests::RoleRequestCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // .env never overrides variables that are already set, so the flag wins.
    if let Some(url) = &cli.api_url {
        std::env::set_var("ADMIN_API_URL", url);
    }
    let config = ClientConfig::from_env()?;
    let ctx = AppContext::new(config, cli.quiet)?;

    match cli.command {
        Commands::Login { email } => cmd::auth::login(&ctx, email).await,
        Commands::Logout => cmd::auth::logout(&ctx),
        Commands::Whoami => cmd::auth::whoami(&ctx),
        Commands::Dashboard => cmd::dashboard::run(&ctx).await,
        Commands::Categories(cmd) => cmd::categories::run(&ctx, cmd).await,
        Commands::Posts(cmd) => cmd::posts::run(&ctx, cmd).await,
        Commands::Ads(cmd) => cmd::ads::run(&ctx, cmd).await,
        Commands::Users(cmd) => cmd::users::run(&ctx, cmd).await,
        Commands::Permissions(cmd) => cmd::permissions::run(&ctx, cmd).await,
        Commands::RoleRequests(cmd) => cmd::role_requests::run(&ctx, cmd).await,
    }
}
