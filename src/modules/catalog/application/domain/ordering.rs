use chrono::NaiveDate;
use std::cmp::Ordering;

/// Descending by date. Undated entries sort ahead of all dated ones.
pub fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => b.cmp(&a),
    }
}
