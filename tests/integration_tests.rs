use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use bikeshare_explorer::chart;
use bikeshare_explorer::error::Error;
use bikeshare_explorer::loader::load;
use bikeshare_explorer::model::{City, DayFilter, MonthFilter};
use bikeshare_explorer::stats::series::{trip_series, ChartDimension};
use bikeshare_explorer::stats::{demographics, duration, station, time, users};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_all_all_returns_full_dataset() {
    let dataset = load(&fixtures(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();
    assert_eq!(dataset.len(), 6);
}

#[test]
fn test_month_and_day_filters_compose() {
    let march = load(
        &fixtures(),
        City::Chicago,
        MonthFilter::March,
        DayFilter::All,
    )
    .unwrap();
    assert_eq!(march.len(), 3);
    assert!(march.trips().iter().all(|t| t.month == 3));

    let march_mondays = load(
        &fixtures(),
        City::Chicago,
        MonthFilter::March,
        DayFilter::Monday,
    )
    .unwrap();
    assert_eq!(march_mondays.len(), 2);
    assert!(march_mondays
        .trips()
        .iter()
        .all(|t| t.month == 3 && t.weekday == chrono::Weekday::Mon));
}

#[test]
fn test_full_pipeline_over_chicago_fixture() {
    let dataset = load(&fixtures(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();

    let time_stats = time::time_stats(&dataset);
    assert_eq!(time_stats.busiest_month, Some(3));
    assert_eq!(time_stats.busiest_day.as_deref(), Some("Monday"));
    // Hours 9 and 17 both appear twice; the lower hour wins the tie.
    assert_eq!(time_stats.busiest_hour, Some(9));

    let station_stats = station::station_stats(&dataset);
    assert_eq!(
        station_stats.popular_start.unwrap().station,
        "Streeter Dr & Grand Ave"
    );
    assert_eq!(
        station_stats.popular_end.unwrap().station,
        "Clinton St & Washington Blvd"
    );
    let route = station_stats.popular_route.unwrap();
    assert_eq!(route.start, "Streeter Dr & Grand Ave");
    assert_eq!(route.end, "Clinton St & Washington Blvd");
    assert_eq!(route.trips, 3);

    let durations = duration::duration_stats(&dataset);
    assert_eq!(durations.total_secs, 2100.0);
    assert_eq!(durations.mean_secs, Some(350.0));
    assert_eq!(durations.min_secs, Some(100.0));
    assert_eq!(durations.max_secs, Some(600.0));

    let user_types = users::user_type_stats(&dataset);
    assert_eq!(
        user_types.counts,
        vec![("Subscriber".to_string(), 5), ("Customer".to_string(), 1)]
    );

    let demo = demographics::demographic_stats(&dataset).unwrap();
    assert_eq!(
        demo.gender_counts,
        vec![("Male".to_string(), 3), ("Female".to_string(), 2)]
    );
    assert_eq!(demo.common_birth_year, Some(1990));
    assert_eq!(demo.most_recent_birth_year, Some(2000));
    assert_eq!(demo.earliest_birth_year, Some(1961));
}

#[test]
fn test_gender_series_counts_per_date() {
    let dataset = load(&fixtures(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();
    let [male, female] = trip_series(&dataset, ChartDimension::Gender).unwrap();

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    assert_eq!(male.label, "Male");
    assert_eq!(
        male.points,
        vec![
            (date(2017, 1, 1), 1),
            (date(2017, 1, 2), 1),
            (date(2017, 6, 30), 1),
        ]
    );
    assert_eq!(female.label, "Female");
    assert_eq!(
        female.points,
        vec![(date(2017, 3, 5), 1), (date(2017, 3, 6), 1)]
    );
}

#[test]
fn test_chart_renders_from_fixture_series() {
    let dataset = load(&fixtures(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();
    let lines = trip_series(&dataset, ChartDimension::UserType).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("trips_by_user_type.svg");
    chart::render(&path, ChartDimension::UserType, &lines).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Trips by User Type"));
}

#[test]
fn test_washington_has_no_demographic_reducers() {
    let dataset = load(
        &fixtures(),
        City::Washington,
        MonthFilter::All,
        DayFilter::All,
    )
    .unwrap();

    // The four universal sections still work.
    assert_eq!(dataset.len(), 3);
    let user_types = users::user_type_stats(&dataset);
    assert_eq!(
        user_types.counts,
        vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
    );

    // Demographic and chart reducers reject the schema.
    assert!(matches!(
        demographics::demographic_stats(&dataset),
        Err(Error::FieldMissing { .. })
    ));
    assert!(matches!(
        trip_series(&dataset, ChartDimension::Gender),
        Err(Error::FieldMissing { .. })
    ));
}

#[test]
fn test_empty_filter_combination_is_well_defined() {
    // The only June trip in the fixture is on a Friday.
    let dataset = load(
        &fixtures(),
        City::Chicago,
        MonthFilter::June,
        DayFilter::Sunday,
    )
    .unwrap();
    assert!(dataset.is_empty());

    let durations = duration::duration_stats(&dataset);
    assert_eq!(durations.total_secs, 0.0);
    assert_eq!(durations.mean_secs, None);

    let time_stats = time::time_stats(&dataset);
    assert_eq!(time_stats.busiest_month, None);

    assert!(users::user_type_stats(&dataset).counts.is_empty());
    assert!(station::station_stats(&dataset).popular_route.is_none());
}

#[test]
fn test_missing_city_file_is_data_unavailable() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load(dir.path(), City::NewYorkCity, MonthFilter::All, DayFilter::All).unwrap_err();
    assert!(matches!(err, Error::DataUnavailable { .. }));
}
