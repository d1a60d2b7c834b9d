//! Step size of a progression.

use core::fmt;

/// Step size between consecutive members.
///
/// `Discrete(0.0)` denotes the empty progression. `Continuous` replaces the
/// NaN sentinel of the text and attribute forms: every real between the
/// bounds is a member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Increment {
    /// Fixed, finite step. The sign gives the traversal direction.
    Discrete(f64),
    /// Every value in the span counts.
    Continuous,
}

impl Increment {
    /// The empty increment.
    pub const EMPTY: Self = Self::Discrete(0.0);

    /// Map a raw value, NaN becoming [`Increment::Continuous`].
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Self::Continuous
        } else {
            Self::Discrete(value)
        }
    }

    /// Raw value, [`Increment::Continuous`] becoming NaN.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Discrete(step) => step,
            Self::Continuous => f64::NAN,
        }
    }

    /// Discrete step, if any.
    #[inline]
    pub fn step(self) -> Option<f64> {
        match self {
            Self::Discrete(step) => Some(step),
            Self::Continuous => None,
        }
    }

    /// Check for an infinite step.
    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Discrete(step) if step.is_infinite())
    }

    /// Check for a zero step.
    #[inline]
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Discrete(step) if step == 0.0)
    }

    /// Check for a strictly positive step.
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Discrete(step) if step > 0.0)
    }

    /// Check for the continuous span.
    #[inline]
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous)
    }
}

impl Default for Increment {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<f64> for Increment {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Increment> for f64 {
    fn from(value: Increment) -> Self {
        value.to_f64()
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_continuous() {
        assert_eq!(Increment::from_f64(f64::NAN), Increment::Continuous);
        assert!(Increment::Continuous.to_f64().is_nan());
        assert_eq!(Increment::Continuous, Increment::Continuous);
    }

    #[test]
    fn test_flags() {
        assert!(Increment::EMPTY.is_zero());
        assert!(Increment::Discrete(-0.0).is_zero());
        assert!(Increment::Discrete(0.5).is_positive());
        assert!(!Increment::Discrete(-0.5).is_positive());
        assert!(!Increment::Continuous.is_positive());
        assert!(!Increment::Continuous.is_zero());
        assert!(Increment::Discrete(f64::NEG_INFINITY).is_infinite());
    }

    #[test]
    fn test_step() {
        assert_eq!(Increment::Discrete(-0.5).step(), Some(-0.5));
        assert_eq!(Increment::Continuous.step(), None);
    }

    #[test]
    fn test_display_matches_raw_value() {
        assert_eq!(Increment::Discrete(0.1).to_string(), "0.1");
        assert_eq!(Increment::Continuous.to_string(), "NaN");
    }
}
