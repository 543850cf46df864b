use std::fmt;
use serde::{Deserialize, Serialize};

use crate::draw_engine::error::{Error, Result};

/// Largest pool a session accepts; keeps a mistyped bound from allocating
/// billions of numbers.
pub const MAX_POOL_SIZE: u64 = 1_000_000;

/// Range the widget starts with before the user applies their own.
pub const DEFAULT_RANGE: Range = Range { min: 1, max: 100 };

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// Closed interval `[min, max]` the pool is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    /// Validate and build a range. Rejects `min >= max` and oversized ranges.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min >= max {
            return Err(Error::InvalidRange { min, max });
        }
        let range = Range { min, max };
        if range.len() > MAX_POOL_SIZE {
            return Err(Error::RangeTooLarge { min, max, limit: MAX_POOL_SIZE });
        }
        Ok(range)
    }

    /// Number of integers in the range (`max - min + 1`, 0 when degenerate).
    pub fn len(&self) -> u64 {
        if self.min >= self.max {
            return 0;
        }
        // i128 so that i64::MIN..=i64::MAX cannot overflow; saturates at u64::MAX.
        let len = self.max as i128 - self.min as i128 + 1;
        len.min(u64::MAX as i128) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, n: i64) -> bool {
        self.min <= n && n <= self.max
    }
}

impl Default for Range {
    fn default() -> Self {
        DEFAULT_RANGE
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Display state of a single number
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallStatus {
    /// Still in the pool.
    Available,
    /// Drawn earlier.
    Chosen,
    /// The most recently drawn number.
    Current,
}

impl fmt::Display for BallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallStatus::Available => write!(f, "available"),
            BallStatus::Chosen    => write!(f, "chosen"),
            BallStatus::Current   => write!(f, "current"),
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot handed to the presentation layer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub value: i64,
    /// Set on the newest entry only, so the UI can highlight it.
    pub is_last: bool,
}

/// Read-only copy of a session's state, ready to render or serialise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub range: Range,
    pub pool: Vec<i64>,
    /// Draw order, oldest first.
    pub history: Vec<HistoryEntry>,
    pub current: Option<i64>,
    pub can_draw: bool,
    pub can_undo: bool,
}

impl Snapshot {
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn drawn(&self) -> usize {
        self.history.len()
    }

    /// Where `n` currently sits, or `None` if it is outside the range.
    pub fn status_of(&self, n: i64) -> Option<BallStatus> {
        if self.current == Some(n) {
            Some(BallStatus::Current)
        } else if self.history.iter().any(|e| e.value == n) {
            Some(BallStatus::Chosen)
        } else if self.pool.contains(&n) {
            Some(BallStatus::Available)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_min_not_below_max() {
        assert_eq!(Range::new(5, 3), Err(Error::InvalidRange { min: 5, max: 3 }));
        assert_eq!(Range::new(4, 4), Err(Error::InvalidRange { min: 4, max: 4 }));
        assert!(Range::new(-3, 3).is_ok());
    }

    #[test]
    fn range_rejects_oversized_pool() {
        let err = Range::new(0, MAX_POOL_SIZE as i64).unwrap_err();
        assert!(matches!(err, Error::RangeTooLarge { .. }));
        assert!(Range::new(1, MAX_POOL_SIZE as i64).is_ok());
    }

    #[test]
    fn range_len_does_not_overflow_at_extremes() {
        let r = Range { min: i64::MIN, max: i64::MAX };
        assert_eq!(r.len(), u64::MAX);
        assert_eq!(Range { min: 3, max: 3 }.len(), 0);
    }

    #[test]
    fn default_range_is_one_to_hundred() {
        let r = Range::default();
        assert_eq!((r.min, r.max), (1, 100));
        assert_eq!(r.len(), 100);
        assert_eq!(r.to_string(), "1..=100");
    }

    #[test]
    fn snapshot_status_reports_each_state() {
        let snap = Snapshot {
            range: Range { min: 1, max: 4 },
            pool: vec![1, 4],
            history: vec![
                HistoryEntry { value: 3, is_last: false },
                HistoryEntry { value: 2, is_last: true },
            ],
            current: Some(2),
            can_draw: true,
            can_undo: true,
        };
        assert_eq!(snap.status_of(1), Some(BallStatus::Available));
        assert_eq!(snap.status_of(3), Some(BallStatus::Chosen));
        assert_eq!(snap.status_of(2), Some(BallStatus::Current));
        assert_eq!(snap.status_of(9), None);
        assert_eq!((snap.remaining(), snap.drawn()), (2, 2));
    }

    #[test]
    fn ball_status_serialises_snake_case() {
        let json = serde_json::to_string(&BallStatus::Current).unwrap();
        assert_eq!(json, "\"current\"");
    }
}
