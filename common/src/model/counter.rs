use serde::{Deserialize, Serialize};
use std::fmt;

/// A count that never drops below one: purchase quantity and per-diem days.
///
/// Decrementing at one stays at one; incrementing has no upper bound other
/// than saturating at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Counter(u32);

impl Counter {
    pub const ONE: Counter = Counter(1);

    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Counter {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Counter::new(value).ok_or_else(|| format!("counter must be at least 1, got {value}"))
    }
}

impl From<Counter> for u32 {
    fn from(counter: Counter) -> Self {
        counter.0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
