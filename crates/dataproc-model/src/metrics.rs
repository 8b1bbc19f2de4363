//! Aggregate results over numeric datasets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dataset element or aggregate that keeps integers exact.
///
/// Integers serialize as JSON integers and floats as JSON floats, so an
/// integer total of ten is written `10`, not `10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    /// Only used for values above `i64::MAX`.
    UInt(u64),
    Float(f64),
}

impl Numeric {
    pub const ZERO: Numeric = Numeric::Int(0);

    pub fn is_integer(self) -> bool {
        !matches!(self, Numeric::Float(_))
    }

    /// Lossy conversion for float arithmetic.
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(v) => v as f64,
            Numeric::UInt(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }

    /// Exact integer value, `None` for floats.
    pub fn as_i128(self) -> Option<i128> {
        match self {
            Numeric::Int(v) => Some(i128::from(v)),
            Numeric::UInt(v) => Some(i128::from(v)),
            Numeric::Float(_) => None,
        }
    }

    /// Narrows an exact integer, preferring `Int` over `UInt`.
    pub fn from_i128(value: i128) -> Option<Self> {
        if let Ok(v) = i64::try_from(value) {
            Some(Numeric::Int(v))
        } else {
            u64::try_from(value).ok().map(Numeric::UInt)
        }
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(v) => write!(f, "{v}"),
            Numeric::UInt(v) => write!(f, "{v}"),
            Numeric::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(i64::from(value))
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Int(i64::from(value))
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Numeric::UInt(value), Numeric::Int)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

/// Sum and arithmetic mean of a numeric dataset.
///
/// `total` is exact for all-integer datasets. `average` is a float for any
/// non-empty dataset and the integer zero for an empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub total: Numeric,
    pub average: Numeric,
}
