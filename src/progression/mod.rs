//! The progression value type.
//!
//! A progression is the closed span `[from, to]` (or its reverse) sampled at a
//! fixed increment. It describes the values a controlled quantity takes during
//! a sweep.

mod edit;
mod increment;
mod membership;
mod validation;
mod values;

pub use edit::Editable;
pub use increment::Increment;
pub use validation::Field;
pub use values::Values;

use core::fmt;

use crate::error::{ArgumentError, OperationError, Result};
use crate::notify::{ChangeListeners, ListenerId, Property};

/// Numeric fields captured by [`Editable::begin_edit`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct Snapshot {
    from_value: f64,
    to_value: f64,
    increment: Increment,
}

/// Arithmetic progression of reals.
///
/// Template-origin progressions keep their numeric fields for life; only
/// `selected` may change.
pub struct Progression {
    from_value: f64,
    to_value: f64,
    increment: Increment,
    from_template: bool,
    selected: bool,
    // Cached from `increment`, see `apply_increment`.
    increasing: bool,
    empty: bool,
    snapshot: Option<Snapshot>,
    listeners: ChangeListeners,
}

impl Progression {
    /// Create the empty progression `From 0 To 0 By 0`.
    pub fn empty() -> Self {
        Self {
            from_value: 0.0,
            to_value: 0.0,
            increment: Increment::EMPTY,
            from_template: false,
            selected: false,
            increasing: false,
            empty: true,
            snapshot: None,
            listeners: ChangeListeners::new(),
        }
    }

    /// Create a progression with validation.
    ///
    /// A raw NaN increment becomes [`Increment::Continuous`].
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::InfiniteIncrement` for an infinite increment and
    /// `ArgumentError::DirectionMismatch` when the increment sign disagrees
    /// with the order of `from` and `to`.
    pub fn new(
        from_value: f64,
        to_value: f64,
        increment: impl Into<Increment>,
        from_template: bool,
    ) -> Result<Self> {
        let increment = increment.into();
        let mut progression = Self {
            from_value,
            to_value,
            ..Self::empty()
        };
        progression.apply_increment(increment)?;
        check_direction(from_value, to_value, progression.increment)?;
        progression.from_template = from_template;
        Ok(progression)
    }

    /// First attainable value.
    #[inline]
    pub fn from_value(&self) -> f64 {
        self.from_value
    }

    /// Last attainable value.
    #[inline]
    pub fn to_value(&self) -> f64 {
        self.to_value
    }

    /// Step size.
    #[inline]
    pub fn increment(&self) -> Increment {
        self.increment
    }

    /// Check if the progression came from a template and is read-only.
    #[inline]
    pub fn from_template(&self) -> bool {
        self.from_template
    }

    /// Check if the progression is active during a test.
    #[inline]
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Check if the progression has no members (`increment == 0`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Check if the progression steps upward (`increment > 0`).
    #[inline]
    pub fn is_increasing(&self) -> bool {
        self.increasing
    }

    /// Check if every value between the bounds is a member.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        self.increment.is_continuous()
    }

    /// First value, or `None` for the empty progression.
    pub fn first(&self) -> Option<f64> {
        if self.empty {
            None
        } else {
            Some(self.from_value)
        }
    }

    /// Declared last value, or `None` for the empty progression.
    ///
    /// This is the bound, not the last enumerated member.
    pub fn last(&self) -> Option<f64> {
        if self.empty {
            None
        } else {
            Some(self.to_value)
        }
    }

    /// Set the first value.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::TemplateReadOnly` on a template progression.
    pub fn set_from_value(&mut self, value: f64) -> Result<()> {
        self.ensure_mutable(Field::FromValue)?;
        if self.from_value != value {
            self.from_value = value;
            self.listeners.notify(Property::FromValue);
        }
        Ok(())
    }

    /// Set the last value.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::TemplateReadOnly` on a template progression.
    pub fn set_to_value(&mut self, value: f64) -> Result<()> {
        self.ensure_mutable(Field::ToValue)?;
        if self.to_value != value {
            self.to_value = value;
            self.listeners.notify(Property::ToValue);
        }
        Ok(())
    }

    /// Set the step size. A raw NaN becomes [`Increment::Continuous`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::TemplateReadOnly` on a template progression
    /// and `ArgumentError::InfiniteIncrement` for an infinite step.
    pub fn set_increment(&mut self, increment: impl Into<Increment>) -> Result<()> {
        self.ensure_mutable(Field::Increment)?;
        let increment = increment.into();
        if self.apply_increment(increment)? {
            self.listeners.notify(Property::Increment);
        }
        Ok(())
    }

    /// Mark the progression active or inactive. Allowed on templates.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            self.selected = selected;
            self.listeners.notify(Property::Selected);
        }
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Property) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a change listener. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn ensure_mutable(&self, field: Field) -> Result<()> {
        if self.from_template {
            return Err(OperationError::TemplateReadOnly(field).into());
        }
        Ok(())
    }

    /// Store a new increment and refresh the cached direction flags.
    /// `Discrete(NaN)` is stored as `Continuous`.
    ///
    /// Returns whether the stored increment changed.
    fn apply_increment(&mut self, increment: Increment) -> Result<bool> {
        let increment = match increment {
            Increment::Discrete(step) if step.is_nan() => Increment::Continuous,
            other => other,
        };
        if increment.is_infinite() {
            return Err(ArgumentError::InfiniteIncrement(increment.to_f64()).into());
        }
        let changed = self.increment != increment;
        self.increment = increment;
        self.increasing = increment.is_positive();
        self.empty = increment.is_zero();
        Ok(changed)
    }
}

fn check_direction(from: f64, to: f64, increment: Increment) -> Result<()> {
    if let Increment::Discrete(step) = increment {
        if (step >= 0.0 && from > to) || (step < 0.0 && to > from) {
            return Err(ArgumentError::DirectionMismatch {
                from,
                to,
                increment: step,
            }
            .into());
        }
    }
    Ok(())
}

impl Default for Progression {
    fn default() -> Self {
        Self::empty()
    }
}

impl Clone for Progression {
    fn clone(&self) -> Self {
        Self {
            from_value: self.from_value,
            to_value: self.to_value,
            increment: self.increment,
            from_template: self.from_template,
            selected: self.selected,
            increasing: self.increasing,
            empty: self.empty,
            snapshot: None,
            listeners: ChangeListeners::new(),
        }
    }
}

impl PartialEq for Progression {
    fn eq(&self, other: &Self) -> bool {
        self.from_value == other.from_value
            && self.to_value == other.to_value
            && self.increment == other.increment
            && self.from_template == other.from_template
            && self.selected == other.selected
    }
}

impl fmt::Debug for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progression")
            .field("from_value", &self.from_value)
            .field("to_value", &self.to_value)
            .field("increment", &self.increment)
            .field("from_template", &self.from_template)
            .field("selected", &self.selected)
            .field("editing", &self.snapshot.is_some())
            .finish()
    }
}
