use std::convert::Infallible;

use crate::{Itinerary, NewItinerary};

use super::{ItineraryStore, stamp};

/// Itinerary store held entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryItineraryStore {
    itineraries: Vec<Itinerary>,
}

impl MemoryItineraryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItineraryStore for MemoryItineraryStore {
    type Error = Infallible;

    fn list(&self) -> Result<Vec<Itinerary>, Self::Error> {
        Ok(self.itineraries.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Itinerary>, Self::Error> {
        Ok(self.itineraries.iter().find(|it| it.id == id).cloned())
    }

    fn save(&mut self, draft: NewItinerary) -> Result<Itinerary, Self::Error> {
        let itinerary = stamp(draft);
        self.itineraries.push(itinerary.clone());
        Ok(itinerary)
    }

    fn replace(&mut self, itinerary: Itinerary) -> Result<bool, Self::Error> {
        match self.itineraries.iter_mut().find(|it| it.id == itinerary.id) {
            Some(slot) => {
                *slot = itinerary;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &str) -> Result<bool, Self::Error> {
        let before = self.itineraries.len();
        self.itineraries.retain(|it| it.id != id);
        Ok(self.itineraries.len() != before)
    }
}
