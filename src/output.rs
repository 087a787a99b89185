//! Presentation layer: formats reducer results into display text.
//!
//! Pure string builders plus the section wrapper with its timing footer;
//! nothing here feeds back into the statistics engine.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

use crate::stats::types::{
    DemographicStats, DurationStats, StationStats, TimeStats, UserTypeStats,
};

const SEPARATOR_WIDTH: usize = 40;

/// Prints one display section: header line, body produced by `body`, and
/// a `This took N seconds.` footer with a dashed separator.
pub fn print_section<F: FnOnce() -> String>(header: &str, body: F) {
    println!("\n{header}\n");
    let start = Instant::now();
    println!("{}", body());
    println!("\nThis took {} seconds.", start.elapsed().as_secs_f64());
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

pub fn format_time_stats(stats: &TimeStats) -> String {
    let month = stats
        .busiest_month
        .and_then(crate::model::month_name)
        .unwrap_or("n/a");
    let day = stats.busiest_day.as_deref().unwrap_or("n/a");
    let hour = match stats.busiest_hour {
        Some(hour) => format!("{hour}:00"),
        None => "n/a".to_string(),
    };

    format!(
        "The busiest month is {month}.\n\
         The busiest day is {day}.\n\
         The most popular start hour is {hour}."
    )
}

pub fn format_station_stats(stats: &StationStats) -> String {
    let start = stats
        .popular_start
        .as_ref()
        .map_or("n/a", |s| s.station.as_str());
    let end = stats
        .popular_end
        .as_ref()
        .map_or("n/a", |s| s.station.as_str());
    let route = match &stats.popular_route {
        Some(route) => format!("{} to {}", route.start, route.end),
        None => "n/a".to_string(),
    };

    format!(
        "The most popular start station is {start}.\n\
         The most popular end station is {end}.\n\
         The most popular route is {route}."
    )
}

pub fn format_duration_stats(stats: &DurationStats) -> String {
    format!(
        "Total travel time: {} seconds\n\
         Mean travel time: {} seconds\n\
         Shortest travel time: {} seconds\n\
         Longest travel time: {} seconds",
        stats.total_secs,
        or_na(stats.mean_secs),
        or_na(stats.min_secs),
        or_na(stats.max_secs),
    )
}

pub fn format_user_type_stats(stats: &UserTypeStats) -> String {
    let mut out = String::from("Counts of User Types");
    for (user_type, count) in &stats.counts {
        out.push_str(&format!("\n  {user_type}: {count}"));
    }
    out
}

pub fn format_demographic_stats(stats: &DemographicStats) -> String {
    let mut out = String::from("Counts of Gender");
    for (gender, count) in &stats.gender_counts {
        out.push_str(&format!("\n  {gender}: {count}"));
    }
    out.push_str(&format!(
        "\nThe most common year of birth: {}\n\
         The most recent year of birth: {}\n\
         The earliest year of birth: {}",
        or_na(stats.common_birth_year),
        or_na(stats.most_recent_birth_year),
        or_na(stats.earliest_birth_year),
    ));
    out
}

fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// Full analysis result for the non-interactive JSON output mode.
#[derive(Debug, Serialize)]
pub struct Report {
    pub city: String,
    pub month: String,
    pub day: String,
    pub record_count: usize,
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub user_types: UserTypeStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demographics: Option<DemographicStats>,
}

/// Prints the report as pretty-printed JSON on stdout.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::types::{RouteCount, StationCount};

    #[test]
    fn test_format_time_stats() {
        let text = format_time_stats(&TimeStats {
            busiest_month: Some(6),
            busiest_day: Some("Tuesday".to_string()),
            busiest_hour: Some(17),
        });
        assert_eq!(
            text,
            "The busiest month is June.\n\
             The busiest day is Tuesday.\n\
             The most popular start hour is 17:00."
        );
    }

    #[test]
    fn test_format_time_stats_empty() {
        let text = format_time_stats(&TimeStats {
            busiest_month: None,
            busiest_day: None,
            busiest_hour: None,
        });
        assert!(text.contains("The busiest month is n/a."));
        assert!(text.contains("The most popular start hour is n/a."));
    }

    #[test]
    fn test_format_station_stats() {
        let text = format_station_stats(&StationStats {
            popular_start: Some(StationCount {
                station: "Streeter Dr & Grand Ave".to_string(),
                trips: 12,
            }),
            popular_end: Some(StationCount {
                station: "Canal St & Adams St".to_string(),
                trips: 9,
            }),
            popular_route: Some(RouteCount {
                start: "Streeter Dr & Grand Ave".to_string(),
                end: "Canal St & Adams St".to_string(),
                trips: 5,
            }),
        });
        assert!(text.contains("The most popular start station is Streeter Dr & Grand Ave."));
        assert!(text.contains(
            "The most popular route is Streeter Dr & Grand Ave to Canal St & Adams St."
        ));
    }

    #[test]
    fn test_format_duration_stats_whole_numbers_print_bare() {
        let text = format_duration_stats(&DurationStats {
            total_secs: 600.0,
            mean_secs: Some(200.0),
            min_secs: Some(100.0),
            max_secs: Some(300.0),
        });
        assert!(text.contains("Total travel time: 600 seconds"));
        assert!(text.contains("Mean travel time: 200 seconds"));
    }

    #[test]
    fn test_format_duration_stats_empty() {
        let text = format_duration_stats(&DurationStats {
            total_secs: 0.0,
            mean_secs: None,
            min_secs: None,
            max_secs: None,
        });
        assert!(text.contains("Total travel time: 0 seconds"));
        assert!(text.contains("Mean travel time: n/a seconds"));
    }

    #[test]
    fn test_format_user_type_stats_order_preserved() {
        let text = format_user_type_stats(&UserTypeStats {
            counts: vec![
                ("Subscriber".to_string(), 7),
                ("Customer".to_string(), 3),
            ],
        });
        assert_eq!(
            text,
            "Counts of User Types\n  Subscriber: 7\n  Customer: 3"
        );
    }

    #[test]
    fn test_format_demographic_stats() {
        let text = format_demographic_stats(&DemographicStats {
            gender_counts: vec![("Male".to_string(), 5), ("Female".to_string(), 3)],
            common_birth_year: Some(1990),
            most_recent_birth_year: Some(2001),
            earliest_birth_year: Some(1961),
        });
        assert!(text.contains("  Male: 5"));
        assert!(text.contains("The most common year of birth: 1990"));
        assert!(text.contains("The most recent year of birth: 2001"));
        assert!(text.contains("The earliest year of birth: 1961"));
    }

    #[test]
    fn test_report_serializes_without_demographics() {
        let report = Report {
            city: "Washington".to_string(),
            month: "All".to_string(),
            day: "All".to_string(),
            record_count: 0,
            time: TimeStats {
                busiest_month: None,
                busiest_day: None,
                busiest_hour: None,
            },
            stations: StationStats {
                popular_start: None,
                popular_end: None,
                popular_route: None,
            },
            durations: DurationStats {
                total_secs: 0.0,
                mean_secs: None,
                min_secs: None,
                max_secs: None,
            },
            user_types: UserTypeStats { counts: vec![] },
            demographics: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("demographics"));
        assert!(json.contains("\"city\":\"Washington\""));
    }
}
