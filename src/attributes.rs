//! Attribute codec boundary.
//!
//! Document writers and readers (XML or otherwise) store a progression as an
//! element named [`ELEMENT_NAME`] carrying four attributes: `FromValue`,
//! `ToValue`, `Increment` and `Selected`. Template provenance is not part of
//! the attribute set; callers supply it when reading.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructureError};
use crate::notify::Property;
use crate::progression::Progression;

/// Element name for a serialized progression.
pub const ELEMENT_NAME: &str = "Steps";

/// Sink for attribute name/value pairs.
pub trait AttributeWriter {
    /// Store one attribute.
    fn write_attribute(&mut self, name: &str, value: &str);
}

/// Source of attribute values by name.
pub trait AttributeReader {
    /// Look up one attribute.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeWriter for BTreeMap<String, String> {
    fn write_attribute(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl AttributeReader for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeWriter for HashMap<String, String> {
    fn write_attribute(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl AttributeReader for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Typed attribute record of a progression.
///
/// A raw NaN increment is the continuous span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProgressionAttributes {
    /// First value.
    pub from_value: f64,
    /// Last value.
    pub to_value: f64,
    /// Step size.
    pub increment: f64,
    /// Active during a test.
    pub selected: bool,
}

impl ProgressionAttributes {
    /// Write the four attributes.
    pub fn write_to<W: AttributeWriter + ?Sized>(&self, writer: &mut W) {
        writer.write_attribute(Property::FromValue.name(), &self.from_value.to_string());
        writer.write_attribute(Property::ToValue.name(), &self.to_value.to_string());
        writer.write_attribute(Property::Increment.name(), &self.increment.to_string());
        writer.write_attribute(Property::Selected.name(), bool_literal(self.selected));
    }

    /// Read the four attributes.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::MissingAttribute` or
    /// `StructureError::InvalidAttribute` for the first attribute that is
    /// absent or unparsable.
    pub fn read_from<R: AttributeReader + ?Sized>(reader: &R) -> Result<Self> {
        Ok(Self {
            from_value: read_number(reader, Property::FromValue.name())?,
            to_value: read_number(reader, Property::ToValue.name())?,
            increment: read_number(reader, Property::Increment.name())?,
            selected: read_bool(reader, Property::Selected.name())?,
        })
    }

    /// Build a progression from the record.
    ///
    /// # Errors
    ///
    /// Returns the construction errors of [`Progression::new`].
    pub fn into_progression(self, from_template: bool) -> Result<Progression> {
        let mut progression =
            Progression::new(self.from_value, self.to_value, self.increment, from_template)?;
        progression.set_selected(self.selected);
        Ok(progression)
    }
}

impl From<&Progression> for ProgressionAttributes {
    fn from(progression: &Progression) -> Self {
        Self {
            from_value: progression.from_value(),
            to_value: progression.to_value(),
            increment: progression.increment().to_f64(),
            selected: progression.selected(),
        }
    }
}

impl Progression {
    /// Typed attribute record of this progression.
    pub fn attributes(&self) -> ProgressionAttributes {
        ProgressionAttributes::from(self)
    }

    /// Write `FromValue`, `ToValue`, `Increment` and `Selected`.
    pub fn write_attributes<W: AttributeWriter + ?Sized>(&self, writer: &mut W) {
        self.attributes().write_to(writer);
    }

    /// Read a progression from its attributes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Structure` for missing or unparsable attributes and
    /// the construction errors of [`Progression::new`] for invalid values.
    pub fn read_attributes<R: AttributeReader + ?Sized>(
        reader: &R,
        from_template: bool,
    ) -> Result<Self> {
        ProgressionAttributes::read_from(reader)?.into_progression(from_template)
    }
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn required<'r, R: AttributeReader + ?Sized>(
    reader: &'r R,
    name: &'static str,
) -> core::result::Result<&'r str, StructureError> {
    reader.attribute(name).ok_or_else(|| {
        tracing::debug!(attribute = name, "missing attribute");
        StructureError::MissingAttribute(name)
    })
}

fn invalid(name: &'static str, value: &str) -> StructureError {
    tracing::debug!(attribute = name, value, "unparsable attribute");
    StructureError::InvalidAttribute {
        name,
        value: value.to_string(),
    }
}

fn read_number<R: AttributeReader + ?Sized>(reader: &R, name: &'static str) -> Result<f64> {
    let value = required(reader, name)?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(name, value).into())
}

fn read_bool<R: AttributeReader + ?Sized>(reader: &R, name: &'static str) -> Result<bool> {
    let value = required(reader, name)?;
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(invalid(name, value).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn attributes(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_write_attributes() {
        let mut p = Progression::new(0.0, 1.5, 0.1, false).unwrap();
        p.set_selected(true);

        let mut out: BTreeMap<String, String> = BTreeMap::new();
        p.write_attributes(&mut out);

        assert_eq!(out["FromValue"], "0");
        assert_eq!(out["ToValue"], "1.5");
        assert_eq!(out["Increment"], "0.1");
        assert_eq!(out["Selected"], "True");
    }

    #[test]
    fn test_read_attributes_with_caller_provenance() {
        let attrs = attributes(&[
            ("FromValue", "-5"),
            ("ToValue", "5"),
            ("Increment", "2.5"),
            ("Selected", "false"),
        ]);

        let p = Progression::read_attributes(&attrs, true).unwrap();
        assert!(p.from_template());
        assert!(!p.selected());
        assert_eq!(p.to_string(), "*From -5 To 5 By 2.5");
    }

    #[test]
    fn test_missing_attribute() {
        let attrs = attributes(&[("FromValue", "0"), ("ToValue", "1"), ("Selected", "True")]);
        assert_eq!(
            Progression::read_attributes(&attrs, false),
            Err(Error::Structure(StructureError::MissingAttribute("Increment")))
        );
    }

    #[test]
    fn test_unparsable_attribute() {
        let attrs = attributes(&[
            ("FromValue", "0"),
            ("ToValue", "1"),
            ("Increment", "0.5"),
            ("Selected", "maybe"),
        ]);
        assert!(matches!(
            Progression::read_attributes(&attrs, false),
            Err(Error::Structure(StructureError::InvalidAttribute { name: "Selected", .. }))
        ));
    }

    #[test]
    fn test_continuous_increment_round_trip() {
        let span = Progression::new(0.0, 1.0, f64::NAN, false).unwrap();
        let mut out: HashMap<String, String> = HashMap::new();
        span.write_attributes(&mut out);
        assert_eq!(out["Increment"], "NaN");

        let back = Progression::read_attributes(&out, false).unwrap();
        assert!(back.is_continuous());
    }
}
