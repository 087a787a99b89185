//! Reducer (d): user-type counts.

use crate::model::Dataset;
use crate::stats::types::UserTypeStats;
use crate::stats::utility::counts_desc;

/// Frequency of each distinct user type, in descending count order with
/// ties broken by first-encountered category. Rows with a missing User
/// Type cell are not counted.
pub fn user_type_stats(dataset: &Dataset) -> UserTypeStats {
    let counts = counts_desc(dataset.trips().iter().filter_map(|t| t.user_type.clone()));
    UserTypeStats { counts }
}
