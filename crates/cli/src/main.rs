//! Tidemark CLI - Operational tools for the admin deployment.
//!
//! # Usage
//!
//! ```bash
//! # Validate the environment configuration
//! tm-cli check-config
//!
//! # Probe the platform health endpoint
//! tm-cli ping
//!
//! # Verify a set of platform credentials
//! tm-cli login -e admin@tidemark.dev
//! ```
//!
//! # Commands
//!
//! - `check-config` - Load and validate configuration from the environment
//! - `ping` - Probe the platform API health endpoint
//! - `login` - Verify credentials against the platform and report the role

#![cfg_attr(not(test), forbid(unsafe_code))]
// CLI output belongs on stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tm-cli")]
#[command(author, version, about = "Tidemark admin CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate configuration from the environment
    CheckConfig,
    /// Probe the platform API health endpoint
    Ping,
    /// Verify credentials against the platform and report the role
    Login {
        /// Email address to authenticate with
        #[arg(short, long)]
        email: String,

        /// Password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::CheckConfig => commands::check_config::run()?,
        Commands::Ping => commands::ping::run().await?,
        Commands::Login { email, password } => {
            commands::login::run(&email, password.as_deref()).await?;
        }
    }
    Ok(())
}
