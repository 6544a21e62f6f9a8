use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Launch date {0} leaves no room for a 7-day series in the calendar")]
    DateOutOfRange(NaiveDate),
}
