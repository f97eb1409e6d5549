use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("event not found: {0}")]
    EventNotFound(String),
    #[error("reminder not found at index {0}")]
    ReminderNotFound(usize),
    #[error("slot not available: {0}")]
    SlotNotAvailable(NaiveTime),
    #[error("date {0} is lower than today")]
    DateLowerThanToday(NaiveDate),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
