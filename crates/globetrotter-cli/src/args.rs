use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ItineraryCommands, PlaceCommands, TripCommands};

/// Plan trips, browse destinations and build day-by-day itineraries
///
/// Trips are kept in a local SQLite database. Itineraries are plain JSON
/// files that can be edited by hand or filled in by a generated plan.
/// Running `gt` without a command lists your trips grouped by status.
#[derive(Parser)]
#[command(version, about, name = "gt")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/globetrotter/globetrotter.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Globetrotter CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage booked trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Browse the destination catalog
    #[command(alias = "p")]
    Place {
        #[command(subcommand)]
        command: PlaceCommands,
    },
    /// Edit itinerary documents
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
}
