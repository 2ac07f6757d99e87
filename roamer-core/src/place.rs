use geo::Coord;

/// Broad kind of a [`Place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaceCategory {
    /// Sights, museums and landmarks.
    #[default]
    Attraction,
    /// Somewhere to eat.
    Restaurant,
    /// Somewhere to stay.
    Hotel,
    /// Stations, airports and other hubs.
    Transport,
    /// A user-defined location.
    Custom,
}

/// A location the traveller may visit.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The id is
/// the identity of a place; a working set never holds two places with the
/// same id.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roamer_core::{Place, PlaceCategory};
///
/// let place = Place::new("louvre", "Louvre Museum", Coord { x: 2.3376, y: 48.8606 })
///     .with_description("World's largest art museum")
///     .with_category(PlaceCategory::Attraction);
///
/// assert_eq!(place.id, "louvre");
/// assert!(place.address.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Place {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Serialised as a `[longitude, latitude]` pair under `coordinates`.
    #[cfg_attr(feature = "serde", serde(rename = "coordinates", with = "lon_lat"))]
    pub location: Coord<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub category: PlaceCategory,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub address: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image: Option<String>,
}

impl Place {
    /// Construct an attraction with an empty description and no address.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            location,
            category: PlaceCategory::default(),
            address: None,
            image: None,
        }
    }

    /// Set the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    #[must_use]
    pub const fn with_category(mut self, category: PlaceCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the postal address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(feature = "serde")]
mod lon_lat {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [coord.x, coord.y].serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Coord<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Coord { x, y })
    }
}
