// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cardcraft - greeting card message generator.
//!
//! This is the binary entry point. Configuration and the provider credential
//! are resolved once at startup; a missing credential halts the process
//! before any message is generated.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod generate;

use std::path::PathBuf;

use cardcraft_config::CardcraftConfig;
use cardcraft_core::{is_known_occasion, CardcraftError, OCCASIONS};
use cardcraft_generator::fallback_message;
use clap::{Parser, Subcommand};

use crate::generate::GenerateArgs;

/// Cardcraft - greeting card message generator.
#[derive(Parser, Debug)]
#[command(name = "cardcraft", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a greeting message, falling back to a template on failure.
    Generate(GenerateArgs),
    /// List the occasions offered by the card form.
    Occasions,
    /// Print the fallback message for an occasion without calling the provider.
    PreviewFallback {
        #[arg(long)]
        occasion: String,
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        sender: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            cardcraft_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    match cli.command {
        Commands::Generate(args) => {
            let generator = match generate::build_generator(&config) {
                Ok(generator) => generator,
                Err(e) => {
                    eprintln!("cardcraft: {e}");
                    std::process::exit(1);
                }
            };

            match generate::run_generate(&generator, &args).await {
                Ok(output) => println!("{output}"),
                Err(e) => {
                    eprintln!("cardcraft: {e}");
                    std::process::exit(exit_code(&e));
                }
            }
        }
        Commands::Occasions => {
            for occasion in OCCASIONS {
                println!("{occasion}");
            }
        }
        Commands::PreviewFallback {
            occasion,
            recipient,
            sender,
        } => {
            if !is_known_occasion(&occasion) {
                eprintln!("cardcraft: `{occasion}` is not a listed occasion, showing the default template");
            }
            println!("{}", fallback_message(&occasion, &recipient, &sender));
        }
    }
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<CardcraftConfig, Vec<cardcraft_config::ConfigError>> {
    match path {
        Some(path) => cardcraft_config::load_and_validate_path(path),
        None => cardcraft_config::load_and_validate(),
    }
}

/// Startup misconfiguration exits 1, rejected input exits 2.
fn exit_code(err: &CardcraftError) -> i32 {
    match err {
        CardcraftError::Validation(_) => 2,
        _ => 1,
    }
}

/// Installs the fmt subscriber. `RUST_LOG` overrides the configured level.
///
/// Logs go to stderr so stdout carries only the message.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cardcraft={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
