//! Text form of a progression.
//!
//! ```text
//! [*]From <from> To <to> By <increment>
//! ```
//!
//! The leading `*` marks a template-origin progression. Parsing ignores case
//! and whitespace, and each keyword may be shortened to any prefix, down to
//! nothing at all: `fr 0 t 1 b 0.25` and `0 1 0.25` are both accepted.
//! Numbers are any text `f64::from_str` accepts; a `NaN` increment denotes the
//! continuous span.

use core::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ArgumentError, Error, Result};
use crate::progression::Progression;

static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(\*)?\s*(?:f(?:r(?:o(?:m)?)?)?)?\s*(\S+)\s+(?:t(?:o)?)?\s*(\S+)\s+(?:b(?:y)?)?\s*(\S+)\s*$",
    )
    .unwrap()
});

impl Progression {
    /// Parse the text form.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::Malformed` if the text does not match the
    /// grammar or a number does not parse, and the construction errors of
    /// [`Progression::new`] otherwise.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }
}

impl FromStr for Progression {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let malformed = || {
            tracing::debug!(input = text, "rejected progression text");
            ArgumentError::Malformed(text.to_string())
        };

        let captures = GRAMMAR.captures(text).ok_or_else(malformed)?;
        let from_template = captures.get(1).is_some();
        let number = |index: usize| captures[index].parse::<f64>().map_err(|_| malformed());

        Progression::new(number(2)?, number(3)?, number(4)?, from_template)
    }
}

impl TryFrom<&str> for Progression {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        text.parse()
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_template() {
            f.write_str("*")?;
        }
        write!(
            f,
            "From {} To {} By {}",
            self.from_value(),
            self.to_value(),
            self.increment()
        )
    }
}

impl Serialize for Progression {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Progression {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
