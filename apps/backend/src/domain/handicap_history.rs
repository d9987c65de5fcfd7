//! A player's handicap index over time.

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandicapEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub handicap_index: f64,
    #[serde(with = "iso_date")]
    pub effective_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The entry in force on `date`: the latest one effective on or before it.
pub fn handicap_at(entries: &[HandicapEntry], date: Date) -> Option<&HandicapEntry> {
    entries
        .iter()
        .filter(|e| e.effective_date <= date)
        .max_by_key(|e| e.effective_date)
}

/// The most recent entry overall.
pub fn current_handicap(entries: &[HandicapEntry]) -> Option<&HandicapEntry> {
    entries.iter().max_by_key(|e| e.effective_date)
}
