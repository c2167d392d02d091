//! # Staylens
//!
//! Hotel-booking analytics: the deterministic data pipeline behind a
//! revenue-insights dashboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │            Sample Data (star schema snapshot)            │
//! │   (date dim, hotel dim, booking fact, booking totals)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [join]
//! ┌─────────────────────────────────────────────────────────┐
//! │             Denormalized rows (JoinedRow)                │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [filter]
//! ┌─────────────────────────────────────────────────────────┐
//! │         Hotel + date-range selection (JoinedRow)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [aggregate]
//! ┌─────────────────────────────────────────────────────────┐
//! │        KPIs / category breakdown / booking trend         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage is a pure function of its predecessor's output; there is no
//! shared mutable state and no incremental caching. Each dashboard query
//! recomputes from the joined set.

pub mod dashboard;
pub mod model;
pub mod pipeline;
pub mod sample;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::dashboard::{Dashboard, DashboardFrame};
    pub use crate::model::{
        AggregatedBookingFact, BookingFact, DateDim, DateRange, HotelCategory, HotelDim, JoinedRow,
    };
    pub use crate::pipeline::aggregate::{
        category_breakdown, summarize, time_series, CategoryRevenue, KpiSummary, TrendPoint,
    };
    pub use crate::pipeline::filter::{filter, BookingFilter};
    pub use crate::pipeline::join::join;
    pub use crate::pipeline::{PipelineError, PipelineResult};
    pub use crate::sample::{generate, GeneratorConfig, SampleData};
}

pub use dashboard::{Dashboard, DashboardFrame};
pub use model::{DateRange, HotelCategory, JoinedRow};
pub use pipeline::{PipelineError, PipelineResult};
