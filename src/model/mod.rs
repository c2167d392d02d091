//! Typed tables for the booking star schema.

pub mod dimension;
pub mod fact;
pub mod joined;
pub mod range;
pub mod types;

pub use dimension::{DateDim, DateRow, HotelDim, HotelRow};
pub use fact::{AggregatedBookingFact, AggregatedBookingRow, BookingFact, BookingRow};
pub use joined::JoinedRow;
pub use range::{DateRange, InvalidRange};
pub use types::HotelCategory;
