//! Lazy enumeration of members.

use core::iter::FusedIterator;

use super::{Increment, Progression};

/// Iterator over the discrete members of a progression, in traversal order.
///
/// Values are accumulated (`current += increment`), so long runs carry the
/// usual binary rounding drift and the last bound may or may not be reached.
/// Empty and continuous progressions yield nothing.
#[derive(Debug, Clone)]
pub struct Values {
    current: f64,
    to_value: f64,
    step: f64,
}

impl Values {
    fn new(progression: &Progression) -> Self {
        let step = match progression.increment {
            Increment::Discrete(step) => step,
            Increment::Continuous => 0.0,
        };
        Self {
            current: progression.from_value,
            to_value: progression.to_value,
            step,
        }
    }
}

impl Iterator for Values {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let within = if self.step > 0.0 {
            self.current <= self.to_value
        } else if self.step < 0.0 {
            self.current >= self.to_value
        } else {
            false
        };
        if !within {
            return None;
        }
        let value = self.current;
        self.current += self.step;
        if self.current == value {
            // Step below the resolution of `current`; stop instead of spinning.
            self.step = 0.0;
        }
        Some(value)
    }
}

impl FusedIterator for Values {}

impl Progression {
    /// Enumerate the members. Each call starts over from the first value.
    pub fn values(&self) -> Values {
        Values::new(self)
    }
}

impl<'a> IntoIterator for &'a Progression {
    type Item = f64;
    type IntoIter = Values;

    fn into_iter(self) -> Values {
        self.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_ascending() {
        let p = Progression::new(0.0, 2.0, 0.5, false).unwrap();
        let values: Vec<f64> = p.values().collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_values_descending() {
        let p = Progression::new(3.0, 0.0, -1.0, false).unwrap();
        let values: Vec<f64> = p.values().collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_values_accumulate() {
        let p = Progression::new(0.0, 0.3, 0.1, false).unwrap();
        let values: Vec<f64> = p.values().collect();
        // 0.1 + 0.1 + 0.1 overshoots 0.3
        assert_eq!(values, vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn test_values_empty_and_continuous() {
        assert_eq!(Progression::empty().values().count(), 0);
        let span = Progression::new(0.0, 1.0, f64::NAN, false).unwrap();
        assert_eq!(span.values().count(), 0);
    }

    #[test]
    fn test_values_stalled_accumulation_terminates() {
        let p = Progression::new(1e20, 2e20, 1.0, false).unwrap();
        assert_eq!(p.values().count(), 1);
    }

    #[test]
    fn test_values_restart() {
        let p = Progression::new(1.0, 3.0, 1.0, false).unwrap();
        let mut first = p.values();
        first.next();
        assert_eq!(p.values().next(), Some(1.0));
        assert_eq!((&p).into_iter().count(), 3);
    }
}
