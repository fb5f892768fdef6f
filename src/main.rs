// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trainer-Desk CLI
//!
//! Terminal view shell over the personal-training backend: customer and
//! training tables, a chronological calendar listing, and per-activity
//! statistics.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trainer_desk::{
    config::Config,
    render,
    services::{apply_filter, BackendClient, CustomerController, TrainingController},
};

#[derive(Parser)]
#[command(name = "trainer-desk", about = "Terminal client for the training backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List customers.
    Customers {
        /// Case-insensitive free-text filter over all columns.
        #[arg(long)]
        query: Option<String>,
    },
    /// List training sessions.
    Trainings {
        /// Case-insensitive free-text filter over all columns.
        #[arg(long)]
        query: Option<String>,
        /// Use the HAL endpoint and resolve customers through their links.
        #[arg(long)]
        linked: bool,
    },
    /// Show trainings as a chronological calendar listing.
    Calendar,
    /// Show per-activity statistics.
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    tracing::debug!(base_url = %config.api_base_url, "Starting Trainer-Desk");
    let client = BackendClient::new(&config)?;

    match cli.command {
        Command::Customers { query } => {
            let mut controller = CustomerController::new(client);
            controller.load().await?;
            let rows = apply_filter(controller.rows(), query.as_deref().unwrap_or(""));
            println!("{}", render::customers_table(&rows));
        }
        Command::Trainings { query, linked } => {
            let mut controller = TrainingController::new(client);
            if linked {
                controller.load_linked().await?;
            } else {
                controller.load().await?;
            }
            let rows = apply_filter(controller.rows(), query.as_deref().unwrap_or(""));
            println!("{}", render::trainings_table(&rows));
        }
        Command::Calendar => {
            let mut controller = TrainingController::new(client);
            controller.load().await?;
            println!("{}", render::calendar_table(&controller.events()));
        }
        Command::Stats => {
            let mut controller = TrainingController::new(client);
            controller.load().await?;
            println!("{}", render::stats_table(&controller.stats()));
        }
    }

    Ok(())
}

/// Initialize logging on stderr so tables stay clean on stdout.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trainer_desk=debug".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .with(format)
        .init();
}
