//! Travel modes carried by route edges.
//!
//! [`TravelMode`] is the full set an edge may be tagged with, while
//! [`EstimateMode`] is the subset the distance estimator knows an average
//! speed for.
//!
//! # Examples
//! ```
//! use roamer_core::{EstimateMode, TravelMode};
//!
//! assert_eq!(TravelMode::Transit.as_str(), "transit");
//! assert_eq!(TravelMode::from(EstimateMode::Cycling), TravelMode::Cycling);
//! assert_eq!(EstimateMode::Walking.speed_kmh(), 5.0);
//! ```

/// How a leg between two places is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Travel by car.
    #[default]
    Driving,
    /// Travel on foot.
    Walking,
    /// Travel by bicycle.
    Cycling,
    /// Public transport.
    Transit,
}

impl TravelMode {
    /// Return the mode as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Transit => "transit",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "cycling" => Ok(Self::Cycling),
            "transit" => Ok(Self::Transit),
            _ => Err(format!("unknown travel mode '{s}'")),
        }
    }
}

/// Travel modes with a known average speed.
///
/// Edge generation and duration estimates are only defined for these modes;
/// transit timings have to come from an external supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EstimateMode {
    /// 60 km/h.
    #[default]
    Driving,
    /// 5 km/h.
    Walking,
    /// 15 km/h.
    Cycling,
}

impl EstimateMode {
    /// Average speed in kilometres per hour.
    pub const fn speed_kmh(self) -> f64 {
        match self {
            Self::Driving => 60.0,
            Self::Walking => 5.0,
            Self::Cycling => 15.0,
        }
    }

    /// Return the mode as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        TravelMode::from_estimate(self).as_str()
    }
}

impl TravelMode {
    const fn from_estimate(mode: EstimateMode) -> Self {
        match mode {
            EstimateMode::Driving => Self::Driving,
            EstimateMode::Walking => Self::Walking,
            EstimateMode::Cycling => Self::Cycling,
        }
    }
}

impl From<EstimateMode> for TravelMode {
    fn from(mode: EstimateMode) -> Self {
        Self::from_estimate(mode)
    }
}

impl std::fmt::Display for EstimateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EstimateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "cycling" => Ok(Self::Cycling),
            _ => Err(format!("unknown estimate mode '{s}' (expected driving, walking or cycling)")),
        }
    }
}
