use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Quality score of an item.
///
/// Ordinary items live in `[MIN, MAX]`; legendary items sit at `LEGENDARY`
/// and are never adjusted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 50;
    pub const LEGENDARY: i32 = 80;

    /// Wrap a raw value. No validation happens here; see `Item::try_new`.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(Self::MIN)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Apply `delta` and clamp the result to `[MIN, MAX]`.
    pub fn adjusted(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta).clamp(Self::MIN, Self::MAX))
    }

    pub fn is_within_bounds(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl ValueObject for Quality {}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
