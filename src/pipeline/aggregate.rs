//! Aggregations over denormalized booking rows.
//!
//! Three independent pure functions feed the dashboard widgets:
//! - `summarize`: scalar KPIs over the filtered rows
//! - `category_breakdown`: revenue per hotel category over the FULL joined
//!   set (a global comparison, intentionally unfiltered)
//! - `time_series`: per-day revenue and booking counts over the filtered
//!   rows, reindexed against the complete calendar so quiet days show as
//!   zero instead of going missing

use crate::model::{DateRange, HotelCategory, JoinedRow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Scalar KPIs over a row set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_revenue: f64,
    /// Count of distinct BookingIDs.
    pub total_bookings: u64,
    /// Total revenue over the row count, 0 for an empty set.
    pub avg_revenue_per_booking: f64,
    /// Mean occupancy percentage, 0 for an empty set.
    pub avg_occupancy: f64,
}

/// Revenue total for one hotel category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: HotelCategory,
    pub total_revenue: f64,
}

/// One day of the booking trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_revenue: f64,
    pub total_bookings: u64,
}

/// Compute the KPI summary. The empty set yields all zeros rather than a
/// division by zero.
pub fn summarize(rows: &[JoinedRow]) -> KpiSummary {
    if rows.is_empty() {
        return KpiSummary::default();
    }
    let total_revenue: f64 = rows.iter().map(|r| r.revenue).sum();
    let distinct: HashSet<u32> = rows.iter().map(|r| r.booking_id).collect();
    let count = rows.len() as f64;
    KpiSummary {
        total_revenue,
        total_bookings: distinct.len() as u64,
        avg_revenue_per_booking: total_revenue / count,
        avg_occupancy: rows.iter().map(|r| r.occupancy).sum::<f64>() / count,
    }
}

/// Revenue by hotel category over the full joined set, ordered by the
/// category rank (Luxury, Business, Economy).
///
/// Categories with no rows are omitted, never synthesized as zero; rows
/// whose category is absent (referential gap) are skipped.
pub fn category_breakdown(rows: &[JoinedRow]) -> Vec<CategoryRevenue> {
    let mut totals: HashMap<HotelCategory, f64> = HashMap::new();
    for row in rows {
        if let Some(category) = row.hotel_category {
            *totals.entry(category).or_insert(0.0) += row.revenue;
        }
    }
    let mut breakdown: Vec<CategoryRevenue> = totals
        .into_iter()
        .map(|(category, total_revenue)| CategoryRevenue {
            category,
            total_revenue,
        })
        .collect();
    breakdown.sort_by_key(|entry| entry.category.rank());
    breakdown
}

/// Per-day booking trend over `rows`, reindexed against the complete
/// calendar of `range`.
///
/// The output has exactly one point per calendar day from start to end
/// inclusive, ascending by date, with zero revenue and zero bookings on days
/// without activity. Renderers rely on that shape. The per-day booking count
/// is a plain row count.
pub fn time_series(rows: &[JoinedRow], range: &DateRange) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, (f64, u64)> = BTreeMap::new();
    for row in rows {
        if let Some(date) = row.date {
            let bucket = buckets.entry(date).or_insert((0.0, 0));
            bucket.0 += row.revenue;
            bucket.1 += 1;
        }
    }
    range
        .days()
        .map(|date| {
            let (total_revenue, total_bookings) =
                buckets.get(&date).copied().unwrap_or((0.0, 0));
            TrendPoint {
                date,
                total_revenue,
                total_bookings,
            }
        })
        .collect()
}
