//! Shared test harness modules for the roamer CLI.

use super::*;

mod helpers;
mod itinerary_steps;
