//! collabctx CLI entry point.

use clap::Parser;
use collabctx_client::cli::{Cli, Commands, OutputFormat};
use collabctx_client::client::CollabClient;
use collabctx_client::output::{json, pretty};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; --quiet keeps only errors
    let default_filter = if cli.quiet { "error" } else { "collabctx=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut client = CollabClient::new(&cli.base_url);
    if let Some(token) = &cli.token {
        client = client.with_token(token);
    }

    match cli.command {
        Commands::Context(context_cmd) => {
            use collabctx_client::cli::context::ContextAction;
            match context_cmd.action {
                ContextAction::Get { id } => {
                    let context = client.get_context(&id.to_string()).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&context)),
                        OutputFormat::Pretty => println!("{}", pretty::format_context(&context)),
                    }
                }
            }
        }
        Commands::Collabs(collabs_cmd) => {
            use collabctx_client::cli::collabs::CollabsAction;
            match collabs_cmd.action {
                CollabsAction::Get { id } => {
                    let collab = client.get_collab(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", json::format_json(&collab)),
                        OutputFormat::Pretty => println!("{}", pretty::format_collab(&collab)),
                    }
                }
            }
        }
    }

    Ok(())
}
