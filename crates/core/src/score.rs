//! Similarity and tier derivation from raw distances.

use serde::Serialize;

/// Similarity at or above which an item is a strong match.
pub const GOOD_THRESHOLD: f64 = 0.80;
/// Similarity at or above which an item is a fair match.
pub const MID_THRESHOLD: f64 = 0.50;

/// `clamp(1 - distance, 0, 1)`. Non-finite distances count as 1.
pub fn similarity(distance: f64) -> f64 {
    let d = if distance.is_finite() { distance } else { 1.0 };
    (1.0 - d).clamp(0.0, 1.0)
}

/// Whole-number percentage shown next to each entry.
pub fn percent(similarity: f64) -> u32 {
    (similarity * 100.0).round() as u32
}

/// Coarse similarity bucket used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Mid,
    Low,
}

impl Tier {
    pub fn from_similarity(s: f64) -> Self {
        if s >= GOOD_THRESHOLD {
            Tier::Good
        } else if s >= MID_THRESHOLD {
            Tier::Mid
        } else {
            Tier::Low
        }
    }

    /// CSS class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Mid => "mid",
            Tier::Low => "low",
        }
    }
}
