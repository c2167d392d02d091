//! Synthetic star-schema snapshots.
//!
//! `generate` produces the four tables the pipeline runs on: a contiguous
//! daily calendar, a hotel dimension with a fixed name/category assignment,
//! a booking fact with uniformly drawn keys and measures, and the 1:1
//! per-booking totals table. Generation is deterministic for a fixed seed.

pub mod config;

pub use config::{ConfigError, GeneratorConfig};

use crate::model::{
    AggregatedBookingFact, AggregatedBookingRow, BookingFact, BookingRow, DateDim, DateRow,
    HotelCategory, HotelDim, HotelRow,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Category assignment pattern, applied cyclically by HotelID.
///
/// Fixed lookup, not random: hotel 1 is Luxury, hotel 2 Economy, and so on,
/// wrapping every five hotels.
const CATEGORY_PATTERN: [HotelCategory; 5] = [
    HotelCategory::Luxury,
    HotelCategory::Economy,
    HotelCategory::Business,
    HotelCategory::Luxury,
    HotelCategory::Economy,
];

/// One generated snapshot - the four tables of the star schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    pub dates: DateDim,
    pub hotels: HotelDim,
    pub bookings: BookingFact,
    pub aggregated: AggregatedBookingFact,
}

/// Generate a snapshot from the given sizes and seed.
///
/// Invariants guaranteed for any validated config:
/// - DateIDs are 1..=num_dates with a contiguous daily calendar.
/// - HotelIDs are 1..=num_hotels with unique names.
/// - Every booking references an existing hotel and date.
/// - Exactly one aggregated row per BookingID.
pub fn generate(config: &GeneratorConfig) -> SampleData {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut date_rows = Vec::with_capacity(config.num_dates as usize);
    let mut date = config.start_date;
    for date_id in 1..=config.num_dates {
        date_rows.push(DateRow { date_id, date });
        // Guarded by config validation; the calendar fits the date domain.
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let hotel_rows = (1..=config.num_hotels)
        .map(|hotel_id| HotelRow {
            hotel_id,
            name: hotel_name(hotel_id),
            category: CATEGORY_PATTERN[(hotel_id as usize - 1) % CATEGORY_PATTERN.len()],
        })
        .collect();

    let mut booking_rows = Vec::with_capacity(config.num_bookings as usize);
    let mut aggregated_rows = Vec::with_capacity(config.num_bookings as usize);
    for booking_id in 1..=config.num_bookings {
        booking_rows.push(BookingRow {
            booking_id,
            hotel_id: rng.random_range(1..=config.num_hotels),
            date_id: rng.random_range(1..=config.num_dates),
            revenue: rng.random_range(100.0..=500.0),
            occupancy: rng.random_range(50.0..=100.0),
        });
        aggregated_rows.push(AggregatedBookingRow {
            booking_id,
            total_bookings: rng.random_range(1..=4),
        });
    }

    SampleData {
        dates: DateDim { rows: date_rows },
        hotels: HotelDim { rows: hotel_rows },
        bookings: BookingFact { rows: booking_rows },
        aggregated: AggregatedBookingFact {
            rows: aggregated_rows,
        },
    }
}

/// Fixed ordered hotel names: "Hotel A" .. "Hotel Z", then "Hotel A2" and so
/// on. Unique for any hotel count.
fn hotel_name(hotel_id: u32) -> String {
    let index = hotel_id - 1;
    let letter = (b'A' + (index % 26) as u8) as char;
    let cycle = index / 26;
    if cycle == 0 {
        format!("Hotel {letter}")
    } else {
        format!("Hotel {letter}{}", cycle + 1)
    }
}
