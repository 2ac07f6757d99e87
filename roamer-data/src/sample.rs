//! Paris landmark sample dataset.
//!
//! Eight well-known sights and hand-measured driving distances (km) and
//! times (minutes) between every pair. The legs are symmetric, so the
//! dataset carries 56 directed edges. Useful for demos, benchmarks and
//! behaviour tests that want realistic, reproducible numbers.

use geo::Coord;
use roamer_core::{Place, PlaceCategory, RouteEdge};

struct Landmark {
    name: &'static str,
    description: &'static str,
    lon: f64,
    lat: f64,
    address: &'static str,
}

const LANDMARKS: [Landmark; 8] = [
    Landmark {
        name: "Eiffel Tower",
        description: "Iconic iron lattice tower in Paris",
        lon: 2.2945,
        lat: 48.8584,
        address: "Champ de Mars, 5 Avenue Anatole France, 75007 Paris, France",
    },
    Landmark {
        name: "Louvre Museum",
        description: "World's largest art museum",
        lon: 2.3376,
        lat: 48.8606,
        address: "Rue de Rivoli, 75001 Paris, France",
    },
    Landmark {
        name: "Notre-Dame Cathedral",
        description: "Medieval Catholic cathedral",
        lon: 2.3499,
        lat: 48.8530,
        address: "6 Parvis Notre-Dame - Pl. Jean-Paul II, 75004 Paris, France",
    },
    Landmark {
        name: "Montmartre",
        description: "Historic hill in Paris's 18th arrondissement",
        lon: 2.3431,
        lat: 48.8867,
        address: "Montmartre, 75018 Paris, France",
    },
    Landmark {
        name: "Arc de Triomphe",
        description: "Monument honoring those who fought for France",
        lon: 2.2950,
        lat: 48.8738,
        address: "Place Charles de Gaulle, 75008 Paris, France",
    },
    Landmark {
        name: "Champs-Élysées",
        description: "Famous avenue known for luxury shops",
        lon: 2.3089,
        lat: 48.8698,
        address: "Champs-Élysées, 75008 Paris, France",
    },
    Landmark {
        name: "Palace of Versailles",
        description: "Former royal residence",
        lon: 2.1204,
        lat: 48.8049,
        address: "Place d'Armes, 78000 Versailles, France",
    },
    Landmark {
        name: "Centre Pompidou",
        description: "Complex building housing the largest museum for modern art in Europe",
        lon: 2.3522,
        lat: 48.8606,
        address: "Place Georges-Pompidou, 75004 Paris, France",
    },
];

/// Undirected legs as `(place, place, km, minutes)`, numbered from 1.
const LEGS: [(usize, usize, f64, f64); 28] = [
    (1, 2, 4.5, 25.0),
    (1, 3, 5.1, 30.0),
    (1, 4, 7.2, 35.0),
    (1, 5, 2.8, 15.0),
    (1, 6, 3.5, 20.0),
    (1, 7, 22.0, 45.0),
    (1, 8, 5.0, 28.0),
    (2, 3, 1.8, 12.0),
    (2, 4, 6.1, 30.0),
    (2, 5, 4.2, 22.0),
    (2, 6, 2.9, 18.0),
    (2, 7, 23.0, 50.0),
    (2, 8, 1.5, 10.0),
    (3, 4, 5.8, 28.0),
    (3, 5, 6.0, 32.0),
    (3, 6, 4.5, 26.0),
    (3, 7, 24.0, 55.0),
    (3, 8, 1.0, 8.0),
    (4, 5, 4.8, 25.0),
    (4, 6, 4.0, 22.0),
    (4, 7, 29.0, 60.0),
    (4, 8, 5.5, 26.0),
    (5, 6, 1.2, 8.0),
    (5, 7, 21.0, 40.0),
    (5, 8, 5.1, 27.0),
    (6, 7, 22.0, 42.0),
    (6, 8, 4.0, 24.0),
    (7, 8, 22.5, 52.0),
];

fn place_id(number: usize) -> String {
    format!("place-{number}")
}

fn leg(a: usize, b: usize) -> Option<(f64, f64)> {
    LEGS.iter()
        .find(|&&(x, y, _, _)| (x, y) == (a, b) || (x, y) == (b, a))
        .map(|&(_, _, km, minutes)| (km, minutes))
}

/// The eight sample landmarks, `place-1` (Eiffel Tower) to `place-8`
/// (Centre Pompidou).
#[must_use]
pub fn paris_places() -> Vec<Place> {
    LANDMARKS
        .iter()
        .zip(1..)
        .map(|(landmark, number)| {
            Place::new(
                place_id(number),
                landmark.name,
                Coord {
                    x: landmark.lon,
                    y: landmark.lat,
                },
            )
            .with_description(landmark.description)
            .with_category(PlaceCategory::Attraction)
            .with_address(landmark.address)
        })
        .collect()
}

/// Driving edges between every ordered pair of sample landmarks, grouped by
/// origin in place order.
#[must_use]
pub fn paris_edges() -> Vec<RouteEdge> {
    let numbers = 1..=LANDMARKS.len();
    numbers
        .clone()
        .flat_map(|from| numbers.clone().map(move |to| (from, to)))
        .filter(|(from, to)| from != to)
        .filter_map(|(from, to)| {
            leg(from, to).map(|(km, minutes)| {
                RouteEdge::new(place_id(from), place_id(to), km, minutes)
            })
        })
        .collect()
}
