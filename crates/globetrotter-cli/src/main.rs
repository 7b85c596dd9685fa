//! Globetrotter CLI Application
//!
//! Command-line interface for booking trips and building itineraries.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::Cli;
use globetrotter_core::{params::ListTrips, TripStoreBuilder};
use log::{debug, info};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut store = TripStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open trip store")?;
    store.subscribe(|event| debug!("Trip store event: {}", event.name()));

    let renderer = TerminalRenderer::new(!no_color);

    info!("Globetrotter started");

    let mut cli = Cli::new(store, renderer);
    match command {
        Some(Trip { command }) => cli.handle_trip_command(command),
        Some(Place { command }) => cli.handle_place_command(command),
        Some(Itinerary { command }) => cli.handle_itinerary_command(command).await,
        None => cli.list_trips(&ListTrips::default()),
    }
}
