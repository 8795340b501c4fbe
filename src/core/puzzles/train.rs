//! Steam-train fuel planning (MPMP 2).
//!
//! A train must cross a desert far wider than one tank of fuel can cover, but
//! it may drop fuel beside the track and pick it up on a later pass. Working
//! backwards from the destination, the final stretch is one full tank; each
//! earlier stretch costs an extra out-and-back pass, so stop k (counting from
//! the destination) advances the start of the full-tank run by only
//! `capacity / (2k + 1)`.
//!
//! Puzzle statement: <https://www.think-maths.co.uk/train-puzzle>

use serde::Serialize;

/// Cheapest refuelling plan for one crossing.
#[derive(Debug, Serialize)]
pub struct FuelPlan {
    /// Distance to travel.
    pub distance: f64,
    /// Fuel the tank holds when full.
    pub capacity: f64,
    /// Minimum total fuel spent.
    pub fuel: f64,
    /// Fuel-caching round trips before the final run.
    pub round_trips: u32,
}

/// Computes the minimum fuel needed to travel `distance` with a tank holding
/// `capacity`, caching fuel along the way.
///
/// Runs in as many iterations as there are caching trips, which grows
/// exponentially in `distance / capacity`. Callers are expected to bound that
/// ratio.
pub fn fuel_required(distance: f64, capacity: f64) -> FuelPlan {
    let mut remaining = distance;
    let mut trips = 0u32;
    // Peel stretches off the start of the route until what's left is coverable
    // by one tank spread over the 2n + 1 passes that cross it.
    while remaining * f64::from(2 * trips + 1) > capacity {
        remaining -= capacity / f64::from(2 * trips + 1);
        trips += 1;
    }
    FuelPlan {
        distance,
        capacity,
        fuel: capacity * f64::from(trips) + remaining * f64::from(2 * trips + 1),
        round_trips: trips,
    }
}
