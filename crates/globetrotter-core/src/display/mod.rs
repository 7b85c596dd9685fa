//! Display formatting for trips, places and itineraries.
//!
//! Domain models implement `Display` directly; collections and operation
//! outcomes get newtype wrappers so each output context formats them the
//! same way. Everything renders as markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │  (Trip, Place)  │───▶│ (TripsByStatus) │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Trips, TripsByStatus, Places)
//! - [`results`]: Operation results (CreateResult, GenerationResult)
//! - [`status`]: Confirmation messages (OperationStatus)
//! - [`money`]: Cost formatting (Rupees)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use globetrotter_core::display::{OperationStatus, Rupees};
//!
//! assert_eq!(Rupees(3000.0).to_string(), "₹3,000");
//!
//! let status = OperationStatus::success("Removed day 2".to_string());
//! assert_eq!(status.to_string(), "Success: Removed day 2\n");
//! ```

pub mod collections;
pub mod models;
pub mod money;
pub mod results;
pub mod status;

pub use collections::{Places, Trips, TripsByStatus};
pub use money::Rupees;
pub use results::{CreateResult, GenerationResult};
pub use status::OperationStatus;
