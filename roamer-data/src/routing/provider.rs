//! `EdgeProvider` backed by OSRM's Table API.
//!
//! The provider owns a current-thread Tokio runtime and blocks on it for each
//! request, bridging the asynchronous HTTP client to the synchronous
//! [`EdgeProvider`] trait.

use std::time::Duration;

use reqwest::Client;
use roamer_core::{
    EdgeProvider, EdgeProviderError, EstimateMode, Place, RouteEdge,
    estimate::{round_km, round_minutes},
};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::osrm::{Matrix, TableResponse};

/// Error type for [`HttpEdgeProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "roamer-routing/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpEdgeProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpEdgeProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpEdgeProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpEdgeProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Edge supplier that asks an OSRM service for real road distances and
/// travel times.
///
/// One Table API request covers every ordered pair of places. Pairs OSRM
/// cannot route between produce no edge.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime, or inside a `current_thread` runtime, the
/// provider blocks on its own stored runtime. Inside a multi-threaded
/// runtime it borrows that runtime's handle through
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. The
/// `current_thread` fallback can deadlock if the caller's runtime drives IO
/// this request depends on.
pub struct HttpEdgeProvider {
    client: Client,
    config: HttpEdgeProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpEdgeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEdgeProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpEdgeProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpEdgeProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpEdgeProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpEdgeProviderConfig {
        &self.config
    }

    /// Build the Table API URL for `places`.
    ///
    /// The format is `{base_url}/table/v1/{profile}/{coordinates}` with
    /// semicolon-separated `lon,lat` pairs and both annotations requested.
    fn build_table_url(&self, places: &[Place], mode: EstimateMode) -> String {
        let coords = places
            .iter()
            .map(|place| format!("{},{}", place.location.x, place.location.y))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/table/v1/{mode}/{coords}?annotations=duration,distance",
            self.config.base_url.trim_end_matches('/'),
        )
    }

    async fn fetch_edges_async(
        &self,
        places: &[Place],
        mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        let url = self.build_table_url(places, mode);
        log::debug!("requesting OSRM table for {} places", places.len());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        // OSRM answers rejected queries with a 4xx status and a JSON body
        // naming the failure code.
        let parsed = serde_json::from_str::<TableResponse>(&body);
        if !status.is_success() {
            return Err(match parsed {
                Ok(rejected) if !rejected.is_ok() => EdgeProviderError::ServiceError {
                    code: rejected.code,
                    message: rejected.message.unwrap_or_default(),
                },
                _ => EdgeProviderError::HttpError {
                    url,
                    status: status.as_u16(),
                    message: status.canonical_reason().unwrap_or_default().to_owned(),
                },
            });
        }

        let table = parsed.map_err(|err| EdgeProviderError::ParseError {
            message: err.to_string(),
        })?;
        convert_response(places, mode, table)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> EdgeProviderError {
        if error.is_timeout() {
            return EdgeProviderError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        EdgeProviderError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Turn an OSRM table into edges between every routable ordered pair.
fn convert_response(
    places: &[Place],
    mode: EstimateMode,
    response: TableResponse,
) -> Result<Vec<RouteEdge>, EdgeProviderError> {
    if !response.is_ok() {
        return Err(EdgeProviderError::ServiceError {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let durations = square(response.durations, "durations", places.len())?;
    let distances = square(response.distances, "distances", places.len())?;

    let mut edges = Vec::new();
    for ((from, duration_row), distance_row) in places.iter().zip(&durations).zip(&distances) {
        for ((to, seconds), metres) in places.iter().zip(duration_row).zip(distance_row) {
            if from.id == to.id {
                continue;
            }
            let (Some(seconds), Some(metres)) = (*seconds, *metres) else {
                log::debug!("OSRM has no route from '{}' to '{}'", from.id, to.id);
                continue;
            };
            edges.push(cell_edge(from, to, metres, seconds, mode)?);
        }
    }
    Ok(edges)
}

fn square(matrix: Option<Matrix>, name: &str, size: usize) -> Result<Matrix, EdgeProviderError> {
    let matrix = matrix.ok_or_else(|| EdgeProviderError::ParseError {
        message: format!("OSRM response missing {name} array"),
    })?;
    if matrix.len() != size || matrix.iter().any(|row| row.len() != size) {
        return Err(EdgeProviderError::ParseError {
            message: format!("OSRM {name} matrix is not {size}x{size}"),
        });
    }
    Ok(matrix)
}

#[expect(
    clippy::float_arithmetic,
    reason = "OSRM reports metres and seconds; edges carry kilometres and minutes"
)]
fn cell_edge(
    from: &Place,
    to: &Place,
    metres: f64,
    seconds: f64,
    mode: EstimateMode,
) -> Result<RouteEdge, EdgeProviderError> {
    let invalid = |reason: String| EdgeProviderError::InvalidEdge {
        from: from.id.clone(),
        to: to.id.clone(),
        reason,
    };
    if !(metres.is_finite() && metres >= 0.0) {
        return Err(invalid(format!("distance {metres} m is not a finite, non-negative value")));
    }
    if !(seconds.is_finite() && seconds >= 0.0) {
        return Err(invalid(format!("duration {seconds} s is not a finite, non-negative value")));
    }
    Ok(RouteEdge::new(
        from.id.clone(),
        to.id.clone(),
        round_km(metres / 1000.0),
        round_minutes(seconds / 60.0),
    )
    .with_mode(mode.into()))
}

impl EdgeProvider for HttpEdgeProvider {
    /// Fetch edges between every routable pair of `places`.
    ///
    /// # Runtime requirements
    ///
    /// Inside an existing Tokio runtime the runtime should be multi-threaded;
    /// see the type-level documentation.
    fn route_edges(
        &self,
        places: &[Place],
        mode: EstimateMode,
    ) -> Result<Vec<RouteEdge>, EdgeProviderError> {
        if places.len() < 2 {
            return Err(EdgeProviderError::EmptyInput);
        }

        let future = self.fetch_edges_async(places, mode);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use roamer_core::TravelMode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn landmarks() -> Vec<Place> {
        vec![
            Place::new("eiffel", "Eiffel Tower", Coord { x: 2.2945, y: 48.8584 }),
            Place::new("louvre", "Louvre Museum", Coord { x: 2.3376, y: 48.8606 }),
        ]
    }

    fn table(durations: Matrix, distances: Matrix) -> TableResponse {
        TableResponse {
            code: "Ok".to_owned(),
            message: None,
            durations: Some(durations),
            distances: Some(distances),
        }
    }

    #[rstest]
    fn build_table_url_formats_coordinates(landmarks: Vec<Place>) {
        let provider =
            HttpEdgeProvider::new("http://osrm.example.com").expect("provider should build");

        let url = provider.build_table_url(&landmarks, EstimateMode::Walking);

        assert_eq!(
            url,
            "http://osrm.example.com/table/v1/walking/2.2945,48.8584;2.3376,48.8606?annotations=duration,distance"
        );
    }

    #[rstest]
    fn build_table_url_strips_trailing_slash(landmarks: Vec<Place>) {
        let provider =
            HttpEdgeProvider::new("http://osrm.example.com/").expect("provider should build");

        let url = provider.build_table_url(&landmarks, EstimateMode::Driving);

        assert!(url.starts_with("http://osrm.example.com/table/v1/driving/"));
    }

    #[rstest]
    fn convert_response_converts_units(landmarks: Vec<Place>) {
        let response = table(
            vec![vec![Some(0.0), Some(1500.0)], vec![Some(1530.0), Some(0.0)]],
            vec![vec![Some(0.0), Some(4512.0)], vec![Some(4601.0), Some(0.0)]],
        );

        let edges = convert_response(&landmarks, EstimateMode::Cycling, response)
            .expect("should convert");

        assert_eq!(
            edges,
            vec![
                RouteEdge::new("eiffel", "louvre", 4.51, 25.0).with_mode(TravelMode::Cycling),
                RouteEdge::new("louvre", "eiffel", 4.6, 26.0).with_mode(TravelMode::Cycling),
            ]
        );
    }

    #[rstest]
    fn convert_response_skips_unreachable_pairs(landmarks: Vec<Place>) {
        let response = table(
            vec![vec![Some(0.0), None], vec![Some(60.0), Some(0.0)]],
            vec![vec![Some(0.0), Some(1000.0)], vec![Some(1000.0), Some(0.0)]],
        );

        let edges = convert_response(&landmarks, EstimateMode::Driving, response)
            .expect("should convert");

        assert_eq!(edges.len(), 1);
        assert!(edges.iter().all(|e| e.joins("louvre", "eiffel")));
    }

    #[rstest]
    #[case(-1.0, 60.0)]
    #[case(f64::NAN, 60.0)]
    #[case(1000.0, f64::INFINITY)]
    #[case(1000.0, -5.0)]
    fn convert_response_rejects_invalid_cells(
        landmarks: Vec<Place>,
        #[case] metres: f64,
        #[case] seconds: f64,
    ) {
        let response = table(
            vec![vec![Some(0.0), Some(seconds)], vec![Some(60.0), Some(0.0)]],
            vec![vec![Some(0.0), Some(metres)], vec![Some(1000.0), Some(0.0)]],
        );

        let err = convert_response(&landmarks, EstimateMode::Driving, response)
            .expect_err("should fail");

        assert!(
            matches!(&err, EdgeProviderError::InvalidEdge { from, to, .. } if from == "eiffel" && to == "louvre"),
            "unexpected error {err:?}"
        );
    }

    #[rstest]
    fn convert_response_handles_service_error(landmarks: Vec<Place>) {
        let response = TableResponse {
            code: "InvalidQuery".to_owned(),
            message: Some("Too many coordinates".to_owned()),
            durations: None,
            distances: None,
        };

        let err = convert_response(&landmarks, EstimateMode::Driving, response)
            .expect_err("should fail");

        assert_eq!(
            err,
            EdgeProviderError::ServiceError {
                code: "InvalidQuery".to_owned(),
                message: "Too many coordinates".to_owned(),
            }
        );
    }

    #[rstest]
    fn convert_response_requires_distances(landmarks: Vec<Place>) {
        let response = TableResponse {
            distances: None,
            ..table(vec![vec![Some(0.0), Some(1.0)], vec![Some(1.0), Some(0.0)]], Vec::new())
        };

        let err = convert_response(&landmarks, EstimateMode::Driving, response)
            .expect_err("should fail");

        assert!(matches!(err, EdgeProviderError::ParseError { .. }));
    }

    #[rstest]
    fn convert_response_rejects_mismatched_shape(landmarks: Vec<Place>) {
        let response = table(vec![vec![Some(0.0)]], vec![vec![Some(0.0)]]);

        let err = convert_response(&landmarks, EstimateMode::Driving, response)
            .expect_err("should fail");

        assert!(matches!(err, EdgeProviderError::ParseError { message } if message.contains("2x2")));
    }

    #[rstest]
    fn fewer_than_two_places_is_empty_input(landmarks: Vec<Place>) {
        let provider =
            HttpEdgeProvider::new("http://localhost:5000").expect("provider should build");

        let err = provider
            .route_edges(landmarks.get(..1).unwrap_or_default(), EstimateMode::Driving)
            .expect_err("should fail");

        assert_eq!(err, EdgeProviderError::EmptyInput);
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpEdgeProviderConfig::new("http://example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(HttpEdgeProviderConfig::default().user_agent, DEFAULT_USER_AGENT);
    }
}
