//! Constant-time set predicates.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::{Increment, Progression};

impl Progression {
    /// Check whether `x` is a member.
    ///
    /// Discrete members are `from + k * increment` for integer `k`. The
    /// quotient `(x - from) / increment` must be an exact integer, either as
    /// computed in `f64` or on the shortest decimal forms of the operands, so
    /// `0.3` is a member of `From 0 To 1.5 By 0.1`. The decimal check admits
    /// every value whose decimal quotient is whole, so `0.7` and the other
    /// tenths up to `1.5` are members too, even where the `f64` quotient is
    /// not integral. There is no tolerance band. The empty progression has no
    /// members.
    pub fn has_value(&self, x: f64) -> bool {
        match self.increment {
            Increment::Continuous => {
                let (low, high) = if self.from_value <= self.to_value {
                    (self.from_value, self.to_value)
                } else {
                    (self.to_value, self.from_value)
                };
                low <= x && x <= high
            }
            Increment::Discrete(step) => {
                let in_range = ((step >= 0.0) && self.from_value <= x && x <= self.to_value)
                    || (self.to_value <= x && x <= self.from_value);
                if !in_range || step == 0.0 {
                    return false;
                }
                let y = (x - self.from_value) / step;
                y.trunc() == y || is_whole_decimal_quotient(x, self.from_value, step)
            }
        }
    }

    /// Check whether every member is also a member of `other`.
    ///
    /// Approximate: a `false` may be returned for some true subsets. A missing
    /// `other` is the empty set.
    pub fn is_subset_of<'a>(&self, other: impl Into<Option<&'a Progression>>) -> bool {
        if self.empty {
            return true;
        }
        let Some(other) = other.into() else {
            return false;
        };
        if !other.has_value(self.from_value) {
            return false;
        }

        let step = match self.increment {
            // A continuous span is only checked at its first value.
            Increment::Continuous => return true,
            Increment::Discrete(step) => step,
        };
        if step.abs() > (self.from_value - self.to_value).abs() {
            return true;
        }

        let boundary = self.to_value - step;
        let within = ((boundary < other.to_value) ^ (boundary < other.from_value))
            && !(boundary == other.to_value && boundary == other.from_value);
        if !within {
            return false;
        }

        match other.increment {
            Increment::Continuous => true,
            Increment::Discrete(other_step) => is_multiple_of(step, other_step),
        }
    }
}

/// Decimal remainder test, `false` when either value has no decimal form.
fn is_multiple_of(step: f64, other_step: f64) -> bool {
    let (Some(step), Some(other_step)) = (to_decimal(step), to_decimal(other_step)) else {
        return false;
    };
    step.checked_rem(other_step)
        .map_or(false, |remainder| remainder.is_zero())
}

/// `(x - from) / step` evaluated on decimal forms, `false` when out of range.
fn is_whole_decimal_quotient(x: f64, from: f64, step: f64) -> bool {
    let (Some(x), Some(from), Some(step)) = (to_decimal(x), to_decimal(from), to_decimal(step))
    else {
        return false;
    };
    x.checked_sub(from)
        .and_then(|offset| offset.checked_div(step))
        .map_or(false, |quotient| quotient.fract().is_zero())
}

fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string()).ok()
}
