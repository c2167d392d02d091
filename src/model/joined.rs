// src/model/joined.rs
use crate::model::types::HotelCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One denormalized booking row - the left-join product of the booking fact
/// with the hotel dimension, the date dimension, and the per-booking totals.
///
/// Right-hand attributes are `Option`s: a missing dimension match leaves them
/// `None` rather than failing the pipeline. Under intact referential
/// integrity every field is populated and the joined set has exactly one row
/// per booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRow {
    pub booking_id: u32,
    pub hotel_id: u32,
    pub date_id: u32,
    pub revenue: f64,
    pub occupancy: f64,
    pub hotel_name: Option<String>,
    pub hotel_category: Option<HotelCategory>,
    pub date: Option<NaiveDate>,
    pub total_bookings: Option<u32>,
}
