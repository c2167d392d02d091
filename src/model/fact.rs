//! Fact tables - the measured booking events referencing dimension keys.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One booking event.
///
/// `hotel_id` and `date_id` are foreign keys into the hotel and date
/// dimensions; multiple bookings may share a hotel and a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRow {
    pub booking_id: u32,
    pub hotel_id: u32,
    pub date_id: u32,
    /// Booking revenue, non-negative.
    pub revenue: f64,
    /// Occupancy percentage in [0, 100].
    pub occupancy: f64,
}

/// The booking fact table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingFact {
    pub rows: Vec<BookingRow>,
}

impl BookingFact {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One booking-total row, keyed by BookingID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedBookingRow {
    pub booking_id: u32,
    /// Positive booking count carried per booking.
    pub total_bookings: u32,
}

/// Per-booking totals.
///
/// Despite the name this is a 1:1 decoration of [`BookingFact`] - exactly one
/// row per distinct BookingID, not a grouped aggregate. Downstream consumers
/// expect one `total_bookings` value per booking, so the 1:1 shape is part of
/// the contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregatedBookingFact {
    pub rows: Vec<AggregatedBookingRow>,
}

impl AggregatedBookingFact {
    /// Index by BookingID for join lookups.
    pub fn by_booking_id(&self) -> HashMap<u32, &AggregatedBookingRow> {
        self.rows.iter().map(|r| (r.booking_id, r)).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
