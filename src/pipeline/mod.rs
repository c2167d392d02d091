//! The join / filter / aggregate pipeline.
//!
//! Three stages, each a pure function of its inputs:
//! 1. Join: booking fact + dimensions + totals → denormalized rows
//! 2. Filter: hotel name equality + inclusive date range
//! 3. Aggregate: KPIs, category breakdown, per-day booking trend
//!
//! Error semantics are deliberately narrow: empty results and referential
//! gaps degrade to zeros and `None` fields; only precondition violations
//! (malformed or out-of-span ranges, unknown hotels) fail, and they fail
//! fast at the query boundary.

pub mod aggregate;
pub mod filter;
pub mod join;

use crate::model::range::InvalidRange;
use crate::model::DateRange;
use thiserror::Error;

/// Errors that can fail a dashboard query.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRange),

    #[error("hotel {0:?} is not present in the hotel dimension")]
    UnknownHotel(String),

    #[error("requested range {requested} falls outside the calendar span {span}")]
    RangeOutOfSpan {
        requested: DateRange,
        span: DateRange,
    },

    #[error("the date dimension is empty")]
    EmptyCalendar,
}

pub type PipelineResult<T> = Result<T, PipelineError>;
