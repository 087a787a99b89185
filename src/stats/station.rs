//! Reducer (b): most popular stations and route.

use crate::model::Dataset;
use crate::stats::types::{RouteCount, StationCount, StationStats};
use crate::stats::utility::mode_first_seen;

/// Most frequent start station, end station, and (start, end) pair.
///
/// Ties resolve to the value encountered first in dataset order.
pub fn station_stats(dataset: &Dataset) -> StationStats {
    let trips = dataset.trips();

    let popular_start = mode_first_seen(trips.iter().map(|t| t.start_station.as_str()))
        .map(|(station, trips)| StationCount {
            station: station.to_string(),
            trips,
        });
    let popular_end = mode_first_seen(trips.iter().map(|t| t.end_station.as_str())).map(
        |(station, trips)| StationCount {
            station: station.to_string(),
            trips,
        },
    );
    let popular_route = mode_first_seen(
        trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )
    .map(|((start, end), trips)| RouteCount {
        start: start.to_string(),
        end: end.to_string(),
        trips,
    });

    StationStats {
        popular_start,
        popular_end,
        popular_route,
    }
}
