//! Calendar month enum with stable numeric values
//!
//! Serialized as the month name (`"January"`, …) rather than a number, so
//! configuration files and JSON payloads stay readable.

use serde::{Deserialize, Serialize};

/// A calendar month, with `None` as the unset value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Month {
    #[default]
    None,
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Stable numeric value: 0 for `None`, 1..=12 for January..December
    pub fn number(self) -> u8 {
        match self {
            Month::None => 0,
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    /// Inverse of [`Month::number`]; rejects anything outside 0..=12
    pub fn from_number(number: u8) -> Option<Self> {
        let month = match number {
            0 => Month::None,
            1 => Month::January,
            2 => Month::February,
            3 => Month::March,
            4 => Month::April,
            5 => Month::May,
            6 => Month::June,
            7 => Month::July,
            8 => Month::August,
            9 => Month::September,
            10 => Month::October,
            11 => Month::November,
            12 => Month::December,
            _ => return None,
        };
        Some(month)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
