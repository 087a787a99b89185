//! Reducer (c): trip-duration aggregates.

use crate::model::Dataset;
use crate::stats::types::DurationStats;

/// Sum, arithmetic mean, minimum, and maximum of the trip durations.
///
/// An empty dataset yields a zero sum and undefined (`None`) mean/min/max
/// rather than an error.
pub fn duration_stats(dataset: &Dataset) -> DurationStats {
    let trips = dataset.trips();
    let total_secs: f64 = trips.iter().map(|t| t.duration_secs).sum();

    if trips.is_empty() {
        return DurationStats {
            total_secs: 0.0,
            mean_secs: None,
            min_secs: None,
            max_secs: None,
        };
    }

    let min_secs = trips
        .iter()
        .map(|t| t.duration_secs)
        .fold(f64::INFINITY, f64::min);
    let max_secs = trips
        .iter()
        .map(|t| t.duration_secs)
        .fold(f64::NEG_INFINITY, f64::max);

    DurationStats {
        total_secs,
        mean_secs: Some(total_secs / trips.len() as f64),
        min_secs: Some(min_secs),
        max_secs: Some(max_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::City;
    use crate::stats::testutil::{dataset, trip};

    fn ride(duration_secs: f64) -> crate::model::Trip {
        trip(
            "2017-04-10 12:00:00",
            duration_secs,
            "A",
            "B",
            None,
            None,
            None,
        )
    }

    #[test]
    fn test_three_ride_scenario() {
        let data = dataset(City::Chicago, vec![ride(100.0), ride(200.0), ride(300.0)]);
        let stats = duration_stats(&data);

        assert_eq!(stats.total_secs, 600.0);
        assert_eq!(stats.mean_secs, Some(200.0));
        assert_eq!(stats.min_secs, Some(100.0));
        assert_eq!(stats.max_secs, Some(300.0));
    }

    #[test]
    fn test_ordering_invariants() {
        let data = dataset(
            City::Chicago,
            vec![ride(42.0), ride(900.0), ride(17.0), ride(300.0)],
        );
        let stats = duration_stats(&data);

        let mean = stats.mean_secs.unwrap();
        assert!(stats.min_secs.unwrap() <= mean);
        assert!(mean <= stats.max_secs.unwrap());
        assert!(stats.total_secs >= stats.max_secs.unwrap());
    }

    #[test]
    fn test_empty_dataset_is_well_defined() {
        let stats = duration_stats(&dataset(City::Chicago, vec![]));
        assert_eq!(stats.total_secs, 0.0);
        assert_eq!(stats.mean_secs, None);
        assert_eq!(stats.min_secs, None);
        assert_eq!(stats.max_secs, None);
    }

    #[test]
    fn test_single_ride() {
        let stats = duration_stats(&dataset(City::Chicago, vec![ride(250.0)]));
        assert_eq!(stats.total_secs, 250.0);
        assert_eq!(stats.mean_secs, Some(250.0));
        assert_eq!(stats.min_secs, Some(250.0));
        assert_eq!(stats.max_secs, Some(250.0));
    }
}
