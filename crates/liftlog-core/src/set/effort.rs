use serde::{Deserialize, Serialize};
use std::fmt;

/// Subjective exertion on a 1 (easiest) to 10 (hardest) scale.
///
/// Out-of-range input is clamped, never rejected. Decoding a server value
/// goes through the same clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct EffortRating(u8);

impl EffortRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for EffortRating {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<i64> for EffortRating {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<EffortRating> for u8 {
    fn from(value: EffortRating) -> Self {
        value.0
    }
}

impl fmt::Display for EffortRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_to_range() {
        assert_eq!(EffortRating::clamped(0).value(), 1);
        assert_eq!(EffortRating::clamped(15).value(), 10);
        assert_eq!(EffortRating::clamped(7).value(), 7);
        assert_eq!(EffortRating::clamped(-3).value(), 1);
    }

    #[test]
    fn test_decoding_clamps() {
        let effort: EffortRating = serde_json::from_str("12").unwrap();
        assert_eq!(effort.value(), 10);
        assert_eq!(serde_json::to_string(&effort).unwrap(), "10");
    }
}
