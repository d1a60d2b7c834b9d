//! On-demand validation messages for editing front ends.

use core::fmt;

use super::Progression;

/// Numeric fields that carry validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// First attainable value.
    FromValue,
    /// Last attainable value.
    ToValue,
    /// Step size.
    Increment,
}

impl Field {
    /// All validated fields.
    pub const ALL: [Field; 3] = [Field::FromValue, Field::ToValue, Field::Increment];

    /// Field name as used by bindings and attribute sets.
    pub const fn name(self) -> &'static str {
        match self {
            Field::FromValue => "FromValue",
            Field::ToValue => "ToValue",
            Field::Increment => "Increment",
        }
    }

    fn check(self, progression: &Progression) -> Option<String> {
        match self {
            Field::FromValue => (progression.from_value > progression.to_value)
                .then(|| "fromValue cannot be greater than toValue".to_string()),
            Field::ToValue => (progression.to_value < progression.from_value)
                .then(|| "toValue cannot be less than fromValue".to_string()),
            Field::Increment => progression
                .increment
                .is_infinite()
                .then(|| "increment must be finite".to_string()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Progression {
    /// Validation message for one field, `None` if the field is valid.
    ///
    /// `FromValue` and `ToValue` compare the bounds regardless of direction.
    pub fn field_error(&self, field: Field) -> Option<String> {
        field.check(self)
    }

    /// All validation messages, one per line. Empty when valid.
    ///
    /// The bound order is only reported for increasing progressions.
    pub fn error(&self) -> String {
        let mut lines = Vec::new();
        if self.increasing && self.to_value < self.from_value {
            lines.push("toValue cannot be less than fromValue".to_string());
        }
        if let Some(message) = Field::Increment.check(self) {
            lines.push(message);
        }
        lines.join("\n")
    }

    /// Check if the aggregate validation message is empty.
    pub fn is_valid(&self) -> bool {
        self.error().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_progression_has_no_errors() {
        let p = Progression::new(0.0, 1.0, 0.5, false).unwrap();
        for field in Field::ALL {
            assert_eq!(p.field_error(field), None);
        }
        assert_eq!(p.error(), "");
        assert!(p.is_valid());
    }

    #[test]
    fn test_reversed_bounds_after_edit() {
        let mut p = Progression::new(0.0, 1.0, 0.5, false).unwrap();
        p.set_to_value(-1.0).unwrap();

        assert!(p.field_error(Field::FromValue).is_some());
        assert_eq!(
            p.field_error(Field::ToValue).as_deref(),
            Some("toValue cannot be less than fromValue")
        );
        assert_eq!(p.error(), "toValue cannot be less than fromValue");
        assert!(!p.is_valid());
    }

    #[test]
    fn test_decreasing_aggregate_is_clean() {
        let p = Progression::new(5.0, 0.0, -1.0, false).unwrap();
        assert!(p.field_error(Field::ToValue).is_some());
        assert!(p.is_valid());
    }
}
