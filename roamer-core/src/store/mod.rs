//! Persistence for saved itineraries.
//!
//! The [`ItineraryStore`] trait is append-on-save and remove-by-id. Route
//! search never touches a store; the CLI and other callers do.

use chrono::Utc;
use uuid::Uuid;

use crate::{Itinerary, NewItinerary};

mod memory;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use memory::MemoryItineraryStore;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteItineraryStore, SqliteItineraryStoreError};

/// Saved itineraries keyed by id.
pub trait ItineraryStore {
    /// Failure reported by the backing storage.
    type Error: std::error::Error;

    /// Every itinerary in the order it was saved.
    fn list(&self) -> Result<Vec<Itinerary>, Self::Error>;

    /// Look up one itinerary.
    fn get(&self, id: &str) -> Result<Option<Itinerary>, Self::Error>;

    /// Append a new itinerary, assigning its id and creation time.
    fn save(&mut self, draft: NewItinerary) -> Result<Itinerary, Self::Error>;

    /// Overwrite the itinerary with the same id. Returns `false` when no such
    /// itinerary exists, in which case nothing is stored.
    fn replace(&mut self, itinerary: Itinerary) -> Result<bool, Self::Error>;

    /// Remove an itinerary. Returns `false` when the id was unknown.
    fn delete(&mut self, id: &str) -> Result<bool, Self::Error>;
}

/// Stamp a draft the way every store does: a fresh `itinerary-<uuid>` id and
/// the current UTC time.
pub(crate) fn stamp(draft: NewItinerary) -> Itinerary {
    Itinerary::from_draft(draft, format!("itinerary-{}", Uuid::new_v4()), Utc::now())
}
