//! Command handlers: run a parsed command against the core and render the
//! result.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use globetrotter_core::{
    catalog::{find_place, places},
    display::{CreateResult, GenerationResult, OperationStatus, Places, Rupees},
    generation::{generate_into, GeminiGenerator, GenerationConfig, StubGenerator},
    itinerary::ItineraryDocument,
    models::TripDraft,
    params::{BookTrip, ListTrips, PlaceId},
    store::{KeyValueStore, TripStore},
};
use log::debug;

use crate::{
    cli::{
        ActivityArgs, DayArgs, GenerateArgs, ItineraryCommands, NewItineraryArgs, PlaceCommands,
        SetDateArgs, TripCommands, UpdateActivityArgs,
    },
    renderer::TerminalRenderer,
};

/// Runs commands against one trip store, rendering to the terminal.
pub struct Cli<S: KeyValueStore> {
    store: TripStore<S>,
    renderer: TerminalRenderer,
}

impl<S: KeyValueStore> Cli<S> {
    pub fn new(store: TripStore<S>, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn handle_trip_command(&mut self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::List(args) => self.list_trips(&args.into()),
            TripCommands::Add(args) => self.add_trip(args.into()),
            TripCommands::Book(args) => self.book_trip(&args.into()),
        }
    }

    pub fn handle_place_command(&self, command: PlaceCommands) -> Result<()> {
        match command {
            PlaceCommands::List => self.list_places(),
            PlaceCommands::Show(args) => self.show_place(&args.into()),
        }
    }

    pub async fn handle_itinerary_command(&self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::New(args) => self.new_itinerary(&args),
            ItineraryCommands::Show(args) => {
                let doc = load_document(&args.file)?;
                self.renderer.render(&doc.to_string())
            }
            ItineraryCommands::AddDay(args) => {
                let mut doc = load_document(&args.file)?;
                let day = doc.add_day();
                save_document(&args.file, &doc)?;
                self.renderer
                    .render(&OperationStatus::success(format!("Added day {day}")).to_string())
            }
            ItineraryCommands::RemoveDay(args) => self.remove_day(&args),
            ItineraryCommands::SetDate(args) => self.set_date(args),
            ItineraryCommands::AddActivity(args) => self.add_activity(&args),
            ItineraryCommands::UpdateActivity(args) => self.update_activity(&args),
            ItineraryCommands::RemoveActivity(args) => self.remove_activity(&args),
            ItineraryCommands::Generate(args) => self.generate(&args).await,
            ItineraryCommands::Total(args) => {
                let doc = load_document(&args.file)?;
                self.renderer.render(&format!(
                    "**Total estimated cost**: {}\n",
                    Rupees(doc.total_cost())
                ))
            }
        }
    }

    /// Lists trips grouped into Ongoing, Upcoming and Completed sections.
    pub fn list_trips(&self, params: &ListTrips) -> Result<()> {
        let grouped = self.store.list_trips(params);
        self.renderer.render(&format!("# My Trips\n\n{grouped}"))
    }

    fn add_trip(&mut self, draft: TripDraft) -> Result<()> {
        let trip = self
            .store
            .create_trip(draft)
            .context("Failed to add trip")?;
        self.renderer.render(&CreateResult::new(trip).to_string())
    }

    fn book_trip(&mut self, params: &BookTrip) -> Result<()> {
        let trip = self
            .store
            .book_trip(params)
            .context("Failed to book trip")?;
        self.renderer.render(&CreateResult::new(trip).to_string())
    }

    fn list_places(&self) -> Result<()> {
        let list = Places(places().iter().collect());
        self.renderer.render(&format!("# Places\n\n{list}"))
    }

    fn show_place(&self, params: &PlaceId) -> Result<()> {
        let Some(place) = find_place(&params.id) else {
            bail!("No place with id '{}'", params.id);
        };

        let trips = self.store.trips_for_place(place.id);
        let mut output = place.to_string();
        if !trips.is_empty() {
            output.push_str(&format!("\n## Your trips\n\n{trips}"));
        }
        self.renderer.render(&output)
    }

    fn new_itinerary(&self, args: &NewItineraryArgs) -> Result<()> {
        if args.file.exists() && !args.force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                args.file.display()
            );
        }

        let doc = if args.empty {
            ItineraryDocument::new()
        } else {
            ItineraryDocument::sample()
        };
        save_document(&args.file, &doc)?;
        self.renderer.render(&doc.to_string())
    }

    fn remove_day(&self, args: &DayArgs) -> Result<()> {
        let mut doc = load_document(&args.file)?;
        let removed = doc.remove_day(args.day);
        if removed {
            save_document(&args.file, &doc)?;
        }
        self.render_status(
            removed,
            format!("Removed day {}", args.day),
            format!("No day {} in this itinerary", args.day),
        )
    }

    fn set_date(&self, args: SetDateArgs) -> Result<()> {
        let mut doc = load_document(&args.file)?;
        let done = match &args.date {
            Some(date) => format!("Day {} set to {date}", args.day),
            None => format!("Cleared date of day {}", args.day),
        };

        let applied = doc.set_day_date(args.day, args.date);
        if applied {
            save_document(&args.file, &doc)?;
        }
        self.render_status(applied, done, format!("No day {} in this itinerary", args.day))
    }

    fn add_activity(&self, args: &DayArgs) -> Result<()> {
        let mut doc = load_document(&args.file)?;
        let Some(id) = doc.add_activity(args.day) else {
            return self.render_status(
                false,
                String::new(),
                format!("No day {} in this itinerary", args.day),
            );
        };
        save_document(&args.file, &doc)?;
        self.renderer.render(
            &OperationStatus::success(format!("Added activity {id} to day {}", args.day))
                .to_string(),
        )
    }

    fn update_activity(&self, args: &UpdateActivityArgs) -> Result<()> {
        let updates = args.updates();
        if updates.is_empty() {
            bail!("Nothing to update; pass at least one of --type, --title, --description, --time, --cost");
        }

        let target = &args.target;
        let mut doc = load_document(&target.file)?;
        let mut applied = true;
        for update in updates {
            debug!("Updating {} of activity {}", update.field(), target.activity);
            applied &= doc.update_activity(target.day, &target.activity, update);
        }

        if !applied {
            return self.render_status(false, String::new(), missing_activity(target));
        }
        save_document(&target.file, &doc)?;

        match doc.day(target.day) {
            Some(day) => self.renderer.render(&day.to_string()),
            None => Ok(()),
        }
    }

    fn remove_activity(&self, args: &ActivityArgs) -> Result<()> {
        let mut doc = load_document(&args.file)?;
        let removed = doc.remove_activity(args.day, &args.activity);
        if removed {
            save_document(&args.file, &doc)?;
        }
        self.render_status(
            removed,
            format!("Removed activity {}", args.activity),
            missing_activity(args),
        )
    }

    async fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let mut doc = if args.file.exists() {
            load_document(&args.file)?
        } else {
            ItineraryDocument::new()
        };

        let result = if args.stub {
            generate_into(&StubGenerator::instant(), &args.prompt, &mut doc).await
        } else {
            let generator = GeminiGenerator::from_config(&GenerationConfig::from_env())?;
            generate_into(&generator, &args.prompt, &mut doc).await
        };
        let plan = result.context("Failed to generate itinerary")?;

        save_document(&args.file, &doc)?;
        self.renderer
            .render(&format!("{}\n{doc}", GenerationResult::new(plan)))
    }

    fn render_status(&self, applied: bool, done: String, missing: String) -> Result<()> {
        self.renderer
            .render(&OperationStatus::from_applied(applied, done, missing).to_string())
    }
}

fn missing_activity(args: &ActivityArgs) -> String {
    format!("No activity {} in day {}", args.activity, args.day)
}

fn load_document(path: &Path) -> Result<ItineraryDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read itinerary {}", path.display()))?;
    ItineraryDocument::from_json(&json)
        .with_context(|| format!("Failed to parse itinerary {}", path.display()))
}

fn save_document(path: &Path, doc: &ItineraryDocument) -> Result<()> {
    let json = doc.to_json()?;
    fs::write(path, json).with_context(|| format!("Failed to write itinerary {}", path.display()))
}
