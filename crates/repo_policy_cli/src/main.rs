use clap::{Parser, Subcommand};
use repo_policy_cli::commands::apply_cmd::{self, ApplyArgs};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Repository policy CLI: converge GitHub repositories to the organization policy
#[derive(Parser)]
#[command(name = "repo-policy")]
#[command(about = "Apply branch protection and settings policy to GitHub repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the policy to one or more repositories
    #[command()]
    Apply(ApplyArgs),

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("REPO_POLICY_LOG"))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Apply(args) => match apply_cmd::execute(args).await {
            Ok(summary) => {
                println!(
                    "Processed {}, skipped {}, unresolved {}",
                    summary.processed.len(),
                    summary.skipped.len(),
                    summary.unresolved.len()
                );
                for repository in &summary.incomplete {
                    println!("Policy partially applied to: {repository}");
                }
                if summary.is_success() {
                    std::process::exit(0);
                }
                for repository in &summary.unresolved {
                    println!("Failed to resolve repository: {repository}");
                }
                std::process::exit(1);
            }
            Err(e) => {
                error!("Error: {e}");
                println!("Error: {e}");
                std::process::exit(2);
            }
        },
        Commands::Version => {
            println!("repo-policy version {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
    }
}
