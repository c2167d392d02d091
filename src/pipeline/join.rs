// src/pipeline/join.rs
use crate::model::{AggregatedBookingFact, BookingFact, DateDim, HotelDim, JoinedRow};

/// Left-join the booking fact with the hotel dimension (on HotelID), the
/// date dimension (on DateID), and the per-booking totals (on BookingID).
///
/// Every booking row yields exactly one joined row: each right-hand key is
/// unique in its table, so there is no fan-out, and a missing match fills
/// the right-hand attributes with `None` instead of dropping the row.
pub fn join(
    bookings: &BookingFact,
    hotels: &HotelDim,
    dates: &DateDim,
    aggregated: &AggregatedBookingFact,
) -> Vec<JoinedRow> {
    let hotels_by_id = hotels.by_id();
    let dates_by_id = dates.by_id();
    let totals_by_id = aggregated.by_booking_id();

    bookings
        .rows
        .iter()
        .map(|booking| {
            let hotel = hotels_by_id.get(&booking.hotel_id);
            let date = dates_by_id.get(&booking.date_id);
            let totals = totals_by_id.get(&booking.booking_id);
            JoinedRow {
                booking_id: booking.booking_id,
                hotel_id: booking.hotel_id,
                date_id: booking.date_id,
                revenue: booking.revenue,
                occupancy: booking.occupancy,
                hotel_name: hotel.map(|h| h.name.clone()),
                hotel_category: hotel.map(|h| h.category),
                date: date.map(|d| d.date),
                total_bookings: totals.map(|t| t.total_bookings),
            }
        })
        .collect()
}
