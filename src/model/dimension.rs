// src/model/dimension.rs
use crate::model::range::DateRange;
use crate::model::types::HotelCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the date dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRow {
    pub date_id: u32,
    pub date: NaiveDate,
}

/// The date dimension - a contiguous daily calendar.
///
/// DateIDs form a dense sequence starting at 1, one-to-one with dates that
/// strictly increase with the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateDim {
    pub rows: Vec<DateRow>,
}

impl DateDim {
    /// Index the dimension by DateID for join lookups.
    pub fn by_id(&self) -> HashMap<u32, &DateRow> {
        self.rows.iter().map(|r| (r.date_id, r)).collect()
    }

    /// The inclusive span covered by the calendar, or `None` when empty.
    pub fn span(&self) -> Option<DateRange> {
        let start = self.rows.iter().map(|r| r.date).min()?;
        let end = self.rows.iter().map(|r| r.date).max()?;
        Some(DateRange { start, end })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row of the hotel dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRow {
    pub hotel_id: u32,
    pub name: String,
    pub category: HotelCategory,
}

/// The hotel dimension.
///
/// Every HotelID maps to exactly one name and one category; names are unique
/// across the dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelDim {
    pub rows: Vec<HotelRow>,
}

impl HotelDim {
    /// Index the dimension by HotelID for join lookups.
    pub fn by_id(&self) -> HashMap<u32, &HotelRow> {
        self.rows.iter().map(|r| (r.hotel_id, r)).collect()
    }

    /// Hotel names in dimension order.
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
