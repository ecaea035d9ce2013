use chrono::{DateTime, Datelike, Local, Utc};

/// Day-of-month of the local wall clock right now. This is the only
/// notion of "today" in the system.
pub fn current_day() -> u32 {
    Local::now().day()
}

/// Local-calendar day-of-month of a stored timestamp. History is
/// partitioned by this, so a record and a query that straddle local
/// midnight can disagree on "today".
pub fn day_of(timestamp: &DateTime<Utc>) -> u32 {
    DateTime::<Local>::from(*timestamp).day()
}
