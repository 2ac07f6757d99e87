use chrono::{DateTime, NaiveDate, Utc};

use crate::Route;

/// A saved, named route.
///
/// Stores stamp the id and creation time; after that an itinerary only
/// changes by full replacement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Itinerary {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Day the trip is planned for.
    pub date: NaiveDate,
    pub route: Route,
    pub created_at: DateTime<Utc>,
}

impl Itinerary {
    /// Stamp a draft with its id and creation time.
    pub fn from_draft(draft: NewItinerary, id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let NewItinerary {
            name,
            description,
            date,
            route,
        } = draft;
        Self {
            id: id.into(),
            name,
            description,
            date,
            route,
            created_at,
        }
    }
}

/// The caller-supplied part of an [`Itinerary`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewItinerary {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub date: NaiveDate,
    pub route: Route,
}

impl NewItinerary {
    /// Draft an itinerary with an empty description.
    pub fn new(name: impl Into<String>, date: NaiveDate, route: Route) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            date,
            route,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
