//! End-to-end orchestration from a generated snapshot to dashboard outputs.
//!
//! This module ties the stages into one explicit pipeline:
//!
//! ```text
//! GeneratorConfig → generate → join → [query: filter → aggregate] → frame
//! ```
//!
//! # Example
//!
//! ```
//! use staylens::dashboard::Dashboard;
//! use staylens::pipeline::filter::BookingFilter;
//! use staylens::sample::GeneratorConfig;
//!
//! let dashboard = Dashboard::from_config(&GeneratorConfig::default());
//! let span = dashboard.date_span().unwrap();
//! let frame = dashboard
//!     .query(&BookingFilter::new("Hotel A", span))
//!     .unwrap();
//! assert_eq!(frame.trend.len() as u64, span.len_days());
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{DateRange, JoinedRow};
use crate::pipeline::aggregate::{
    category_breakdown, summarize, time_series, CategoryRevenue, KpiSummary, TrendPoint,
};
use crate::pipeline::filter::{filter, BookingFilter};
use crate::pipeline::join::join;
use crate::pipeline::{PipelineError, PipelineResult};
use crate::sample::{generate, GeneratorConfig, SampleData};

/// Everything one dashboard refresh needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardFrame {
    /// KPIs over the filtered rows.
    pub kpis: KpiSummary,
    /// Revenue by category over the FULL joined set.
    pub categories: Vec<CategoryRevenue>,
    /// Per-day trend over the filtered rows, one point per day in range.
    pub trend: Vec<TrendPoint>,
    /// The filtered rows themselves, for the detail table.
    pub rows: Vec<JoinedRow>,
}

/// A loaded snapshot with its denormalized row set.
///
/// The join runs once at construction; every `query` recomputes filter and
/// aggregations from the joined set. Nothing is mutated in place.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: SampleData,
    joined: Vec<JoinedRow>,
}

impl Dashboard {
    /// Build a dashboard over an existing snapshot.
    pub fn new(data: SampleData) -> Self {
        let joined = join(&data.bookings, &data.hotels, &data.dates, &data.aggregated);
        Dashboard { data, joined }
    }

    /// Generate a snapshot from `config` and build a dashboard over it.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(generate(config))
    }

    /// The underlying snapshot.
    pub fn data(&self) -> &SampleData {
        &self.data
    }

    /// The denormalized row set.
    pub fn joined(&self) -> &[JoinedRow] {
        &self.joined
    }

    /// Hotel names available for selection, in dimension order.
    pub fn hotel_names(&self) -> Vec<&str> {
        self.data.hotels.names()
    }

    /// The calendar span of the date dimension.
    pub fn date_span(&self) -> Option<DateRange> {
        self.data.dates.span()
    }

    /// Run one dashboard query.
    ///
    /// Fails fast on precondition violations: the hotel must exist in the
    /// hotel dimension and the range must fall within the calendar span.
    /// Past those checks nothing errors - an empty selection produces
    /// zero-valued KPIs and a zero-filled trend.
    pub fn query(&self, selection: &BookingFilter) -> PipelineResult<DashboardFrame> {
        if !self.data.hotels.contains_name(&selection.hotel_name) {
            return Err(PipelineError::UnknownHotel(selection.hotel_name.clone()));
        }
        let span = self.date_span().ok_or(PipelineError::EmptyCalendar)?;
        if !span.covers(&selection.range) {
            return Err(PipelineError::RangeOutOfSpan {
                requested: selection.range,
                span,
            });
        }

        let rows = filter(&self.joined, selection);
        Ok(DashboardFrame {
            kpis: summarize(&rows),
            categories: category_breakdown(&self.joined),
            trend: time_series(&rows, &selection.range),
            rows,
        })
    }
}
