//! Command-line argument definitions using clap
//!
//! Argument structs carry the clap derives and convert into the core's
//! framework-free parameter types with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripStore / ItineraryDocument
//! ```
//!
//! Itinerary commands address a JSON document file plus day and activity
//! ids as printed by `gt itinerary show`.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use globetrotter_core::{
    models::{ActivityType, ActivityUpdate, TripDraft, TripStatus},
    params::{BookTrip, ListTrips, PlaceId},
};

// ============================================================================
// Trip commands
// ============================================================================

/// List trips grouped by status
#[derive(Args)]
pub struct ListTripsArgs {
    /// Only show one status section
    #[arg(short, long)]
    pub status: Option<TripStatusArg>,
    /// Group by the status each trip's dates imply today instead of the
    /// status recorded when it was booked
    #[arg(long)]
    pub live: bool,
}

impl From<ListTripsArgs> for ListTrips {
    fn from(val: ListTripsArgs) -> Self {
        ListTrips {
            status: val.status.map(Into::into),
            live: val.live,
        }
    }
}

/// Add a trip by hand
#[derive(Args)]
pub struct AddTripArgs {
    /// Name of the trip
    pub name: String,
    /// Where the trip goes
    #[arg(short, long)]
    pub destination: String,
    /// First day, e.g. 2026-03-01 or "Mar 01, 2026"
    #[arg(long)]
    pub start: String,
    /// Last day, e.g. 2026-03-05 or "Mar 05, 2026"
    #[arg(long)]
    pub end: String,
    /// Cover image URL
    #[arg(long, default_value = "")]
    pub image: String,
    /// Number of travellers
    #[arg(short, long)]
    pub guests: Option<u32>,
    /// Catalog place the trip belongs to
    #[arg(long)]
    pub place: Option<String>,
}

impl From<AddTripArgs> for TripDraft {
    fn from(val: AddTripArgs) -> Self {
        TripDraft {
            name: val.name,
            destination: val.destination,
            start_date: val.start,
            end_date: val.end,
            image: val.image,
            guests: val.guests,
            place_id: val.place,
        }
    }
}

/// Book a stay at a catalog place
#[derive(Args)]
pub struct BookTripArgs {
    /// Catalog id of the place, see `gt place list`
    pub place_id: String,
    /// Check-in date
    #[arg(long)]
    pub start: String,
    /// Check-out date
    #[arg(long)]
    pub end: String,
    /// Number of travellers
    #[arg(short, long)]
    pub guests: Option<u32>,
}

impl From<BookTripArgs> for BookTrip {
    fn from(val: BookTripArgs) -> Self {
        BookTrip {
            place_id: val.place_id,
            start_date: val.start,
            end_date: val.end,
            guests: val.guests,
        }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// List trips grouped by status
    #[command(aliases = ["l", "ls"])]
    List(ListTripsArgs),
    /// Add a trip
    #[command(alias = "a")]
    Add(AddTripArgs),
    /// Book a stay at a catalog place
    #[command(alias = "b")]
    Book(BookTripArgs),
}

// ============================================================================
// Place commands
// ============================================================================

/// Show one catalog place
#[derive(Args)]
pub struct ShowPlaceArgs {
    /// Catalog id of the place
    pub id: String,
}

impl From<ShowPlaceArgs> for PlaceId {
    fn from(val: ShowPlaceArgs) -> Self {
        PlaceId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum PlaceCommands {
    /// List catalog places
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a place with its expenses and your trips there
    #[command(alias = "s")]
    Show(ShowPlaceArgs),
}

// ============================================================================
// Itinerary commands
// ============================================================================

/// Argument naming an itinerary document file
#[derive(Args)]
pub struct DocumentArgs {
    /// Itinerary JSON file
    pub file: PathBuf,
}

/// Create an itinerary document
#[derive(Args)]
pub struct NewItineraryArgs {
    /// Itinerary JSON file to create
    pub file: PathBuf,
    /// Start with no days instead of the sample day
    #[arg(long)]
    pub empty: bool,
    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Address one day of a document
#[derive(Args)]
pub struct DayArgs {
    /// Itinerary JSON file
    pub file: PathBuf,
    /// Day id
    pub day: u64,
}

/// Set or clear the date of a day
#[derive(Args)]
pub struct SetDateArgs {
    /// Itinerary JSON file
    pub file: PathBuf,
    /// Day id
    pub day: u64,
    /// Date to set; omit to clear
    pub date: Option<String>,
}

/// Address one activity of a document
#[derive(Args)]
pub struct ActivityArgs {
    /// Itinerary JSON file
    pub file: PathBuf,
    /// Day id
    pub day: u64,
    /// Activity id
    pub activity: String,
}

/// Change fields of an activity
#[derive(Args)]
pub struct UpdateActivityArgs {
    #[command(flatten)]
    pub target: ActivityArgs,
    /// Activity category
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<ActivityTypeArg>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Time of day, e.g. 14:30
    #[arg(long)]
    pub time: Option<String>,
    /// Cost, e.g. 1200 or "₹1,200"
    #[arg(long)]
    pub cost: Option<String>,
}

impl UpdateActivityArgs {
    /// One update per flag given, in a fixed field order.
    pub fn updates(&self) -> Vec<ActivityUpdate> {
        let mut updates = Vec::new();
        if let Some(kind) = self.kind {
            updates.push(ActivityUpdate::Kind(kind.into()));
        }
        if let Some(title) = &self.title {
            updates.push(ActivityUpdate::Title(title.clone()));
        }
        if let Some(description) = &self.description {
            updates.push(ActivityUpdate::Description(description.clone()));
        }
        if let Some(time) = &self.time {
            updates.push(ActivityUpdate::Time(time.clone()));
        }
        if let Some(cost) = &self.cost {
            updates.push(ActivityUpdate::Cost(cost.clone()));
        }
        updates
    }
}

/// Replace the document's days with a generated plan
#[derive(Args)]
pub struct GenerateArgs {
    /// Itinerary JSON file
    pub file: PathBuf,
    /// What to plan, e.g. "3 days in Goa on a budget"
    pub prompt: String,
    /// Use the built-in offline plan instead of the hosted model
    #[arg(long)]
    pub stub: bool,
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Create an itinerary document
    #[command(alias = "n")]
    New(NewItineraryArgs),
    /// Show days, activities and costs
    #[command(alias = "s")]
    Show(DocumentArgs),
    /// Append an empty day
    AddDay(DocumentArgs),
    /// Remove a day and its activities
    RemoveDay(DayArgs),
    /// Set or clear a day's date
    SetDate(SetDateArgs),
    /// Append a blank activity to a day
    AddActivity(DayArgs),
    /// Change fields of an activity
    UpdateActivity(UpdateActivityArgs),
    /// Remove an activity
    RemoveActivity(ActivityArgs),
    /// Fill the document from a generated plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Print the total estimated cost
    Total(DocumentArgs),
}

// ============================================================================
// Value enums
// ============================================================================

/// Command-line representation of trip status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TripStatusArg {
    Ongoing,
    Upcoming,
    Completed,
}

impl From<TripStatusArg> for TripStatus {
    fn from(val: TripStatusArg) -> Self {
        match val {
            TripStatusArg::Ongoing => TripStatus::Ongoing,
            TripStatusArg::Upcoming => TripStatus::Upcoming,
            TripStatusArg::Completed => TripStatus::Completed,
        }
    }
}

/// Command-line representation of activity categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ActivityTypeArg {
    Travel,
    Stay,
    Food,
    Activity,
    Other,
}

impl From<ActivityTypeArg> for ActivityType {
    fn from(val: ActivityTypeArg) -> Self {
        match val {
            ActivityTypeArg::Travel => ActivityType::Travel,
            ActivityTypeArg::Stay => ActivityType::Stay,
            ActivityTypeArg::Food => ActivityType::Food,
            ActivityTypeArg::Activity => ActivityType::Activity,
            ActivityTypeArg::Other => ActivityType::Other,
        }
    }
}
