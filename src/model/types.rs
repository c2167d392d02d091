// src/model/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hotel category - a closed set of market segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotelCategory {
    Luxury,
    Business,
    Economy,
}

impl HotelCategory {
    /// Presentation rank used wherever categories are listed.
    ///
    /// Breakdown output is ordered Luxury, Business, Economy regardless of
    /// the order rows arrive in.
    pub fn rank(&self) -> u8 {
        match self {
            HotelCategory::Luxury => 0,
            HotelCategory::Business => 1,
            HotelCategory::Economy => 2,
        }
    }

    /// All categories in presentation order.
    pub fn all() -> [HotelCategory; 3] {
        [
            HotelCategory::Luxury,
            HotelCategory::Business,
            HotelCategory::Economy,
        ]
    }
}

impl fmt::Display for HotelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HotelCategory::Luxury => "Luxury",
            HotelCategory::Business => "Business",
            HotelCategory::Economy => "Economy",
        };
        write!(f, "{s}")
    }
}
