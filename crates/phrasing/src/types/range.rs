use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Wire form of a range: `[low, high, text]`, with `null` for unset bounds.
type RangeTriple = (Option<i64>, Option<i64>, String);

/// One entry of a plural range table.
///
/// An unset `low` bound means "no lower limit" and an unset `high` bound
/// means "no upper limit". A range with both bounds unset admits every
/// quantity, including the absence of one.
///
/// # Example
///
/// ```
/// use phrasing::PluralRange;
///
/// let past = PluralRange::new(None, Some(-2), "Due -%n days ago");
/// assert!(past.admits(Some(-10)));
/// assert!(!past.admits(Some(-1)));
/// assert!(!past.admits(None));
///
/// let any = PluralRange::new(None, None, "Due");
/// assert!(any.admits(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RangeTriple", into = "RangeTriple")]
pub struct PluralRange {
    /// Inclusive lower bound.
    pub low: Option<i64>,
    /// Inclusive upper bound.
    pub high: Option<i64>,
    /// Template used when this range is selected.
    pub text: String,
}

impl PluralRange {
    /// Create a range from optional inclusive bounds.
    pub fn new(low: Option<i64>, high: Option<i64>, text: impl Into<String>) -> Self {
        Self {
            low,
            high,
            text: text.into(),
        }
    }

    /// Create a range matching a single quantity.
    pub fn exactly(n: i64, text: impl Into<String>) -> Self {
        Self::new(Some(n), Some(n), text)
    }

    /// Create a range with only a lower bound.
    pub fn at_least(low: i64, text: impl Into<String>) -> Self {
        Self::new(Some(low), None, text)
    }

    /// Create a range with only an upper bound.
    pub fn at_most(high: i64, text: impl Into<String>) -> Self {
        Self::new(None, Some(high), text)
    }

    /// Returns true when both bounds are unset.
    pub fn is_catch_all(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// Check whether this range is eligible for `quantity`.
    pub fn admits(&self, quantity: Option<i64>) -> bool {
        if self.is_catch_all() {
            return true;
        }
        let Some(n) = quantity else {
            return false;
        };
        match (self.low, self.high) {
            (Some(low), high) => n >= low && high.is_none_or(|high| n <= high),
            (None, Some(high)) => n <= high,
            (None, None) => true,
        }
    }
}

impl Display for PluralRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.low, self.high) {
            (Some(low), Some(high)) if low == high => write!(f, "{low}"),
            (Some(low), Some(high)) => write!(f, "{low}..={high}"),
            (Some(low), None) => write!(f, "{low}.."),
            (None, Some(high)) => write!(f, "..={high}"),
            (None, None) => write!(f, ".."),
        }
    }
}

impl From<RangeTriple> for PluralRange {
    fn from((low, high, text): RangeTriple) -> Self {
        Self { low, high, text }
    }
}

impl From<PluralRange> for RangeTriple {
    fn from(range: PluralRange) -> Self {
        (range.low, range.high, range.text)
    }
}
