use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single commit record as supplied by the Commit Source.
///
/// Records are immutable for the lifetime of a session. `files_changed` and
/// `changes` may be absent; absent values count as 0 for sorting and
/// aggregation but the stored record is never coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    #[serde(rename = "type")]
    pub commit_type: String,
    /// ISO-8601 date-time string; only the date portion is used for
    /// time-bucketed aggregation.
    pub timestamp: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub files_changed: Option<u64>,
    #[serde(default)]
    pub changes: Option<u64>,
}

impl Commit {
    /// Calendar date of this commit: the substring of `timestamp` before the
    /// time separator, validated as YYYY-MM-DD. `None` when the timestamp is
    /// missing or unparsable.
    pub fn date(&self) -> Option<NaiveDate> {
        let date_part = self.timestamp.split('T').next()?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Full timestamp parsed for date-time comparison. Timestamps carrying a
    /// UTC offset compare by their wall-clock value as written.
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        self.timestamp.parse::<NaiveDateTime>().ok().or_else(|| {
            DateTime::parse_from_rfc3339(&self.timestamp)
                .ok()
                .map(|dt| dt.naive_local())
        })
    }
}
