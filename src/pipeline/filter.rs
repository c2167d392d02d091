// src/pipeline/filter.rs
use crate::model::{DateRange, JoinedRow};
use crate::pipeline::PipelineResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dashboard selection: one hotel by name plus an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFilter {
    pub hotel_name: String,
    pub range: DateRange,
}

impl BookingFilter {
    pub fn new(hotel_name: impl Into<String>, range: DateRange) -> Self {
        BookingFilter {
            hotel_name: hotel_name.into(),
            range,
        }
    }

    /// Build a filter from raw endpoints, rejecting start > end.
    pub fn try_new(
        hotel_name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PipelineResult<Self> {
        Ok(BookingFilter {
            hotel_name: hotel_name.into(),
            range: DateRange::new(start, end)?,
        })
    }

    /// Row predicate: hotel name matches and the date falls in the range.
    ///
    /// Rows with an absent name or date (referential gaps) never match.
    pub fn matches(&self, row: &JoinedRow) -> bool {
        row.hotel_name.as_deref() == Some(self.hotel_name.as_str())
            && row.date.is_some_and(|d| self.range.contains(d))
    }
}

/// Apply the filter, keeping rows that satisfy both predicates.
///
/// A hotel name absent from the data yields an empty result, not an error;
/// filtering is idempotent for a fixed filter.
pub fn filter(rows: &[JoinedRow], selection: &BookingFilter) -> Vec<JoinedRow> {
    rows.iter()
        .filter(|row| selection.matches(row))
        .cloned()
        .collect()
}
