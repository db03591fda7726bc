//! Formats and the name conversions built on them.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::FormatError;
use crate::segment::Segment;

/// Separator between segments in both formats and names.
pub const SEPARATOR: char = '/';

/// Variable name to UUID bindings, produced by [`Format::parse`] and consumed
/// by [`Format::render`].
pub type Uuids = BTreeMap<String, Uuid>;

/// A validated resource name format such as `stores/{store}/products/{product}`.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Format {
    segments: Vec<Segment>,
}

/// Parses a format string.
///
/// Every `/`-separated segment must be a lowercase literal (`[a-z]+`) or a
/// variable (`{[a-z]+}`), and no variable name may repeat.
pub fn parse_format(format: &str) -> Result<Format, FormatError> {
    let mut segments = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw) in format.split(SEPARATOR).enumerate() {
        let Some(segment) = Segment::classify(raw) else {
            return Err(FormatError::format_invalid(
                format,
                format!(
                    "segment {} ('{}') must be a lowercase literal or a {{variable}}",
                    index, raw
                ),
            ));
        };

        if let Segment::Variable(name) = &segment {
            if !seen.insert(name.clone()) {
                return Err(FormatError::format_invalid(
                    format,
                    format!("duplicate variable '{}' at segment {}", name, index),
                ));
            }
        }

        segments.push(segment);
    }

    Ok(Format { segments })
}

/// Parses a format string known to be valid.
///
/// # Panics
///
/// Panics if the format is invalid. Use this for formats fixed at compile
/// time, where an invalid format is a programming error.
#[must_use]
pub fn must_parse_format(format: &str) -> Format {
    parse_format(format).unwrap_or_else(|err| panic!("{}", err))
}

impl Format {
    /// Returns the format parsed from this format's canonical string
    /// followed directly by `suffix`, e.g. `/products/{product}`.
    ///
    /// The combined format is validated from scratch, so variables in the
    /// suffix may not reuse names from `self`.
    pub fn append(&self, suffix: &str) -> Result<Format, FormatError> {
        parse_format(&format!("{}{}", self, suffix))
    }

    /// Like [`Format::append`], for suffixes known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if the combined format is invalid.
    #[must_use]
    pub fn must_append(&self, suffix: &str) -> Format {
        self.append(suffix).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Returns the segment matchers in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a parsed format has at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over variable names in segment order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::variable_name)
    }

    /// Returns true if the format binds a variable with this name.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables().any(|v| v == name)
    }

    /// Parses a name against this format, returning the bound UUIDs.
    pub fn parse(&self, name: &str) -> Result<Uuids, FormatError> {
        let parts: Vec<&str> = name.split(SEPARATOR).collect();
        if parts.len() != self.segments.len() {
            return Err(FormatError::name_invalid(
                name,
                self,
                format!(
                    "expected {} segments, got {}",
                    self.segments.len(),
                    parts.len()
                ),
            ));
        }

        let mut uuids = Uuids::new();
        for (index, (segment, part)) in self.segments.iter().zip(parts).enumerate() {
            match segment.matches(part) {
                Ok(Some(uuid)) => {
                    if let Segment::Variable(var) = segment {
                        uuids.insert(var.clone(), uuid);
                    }
                }
                Ok(None) => {}
                Err(expected) => {
                    return Err(FormatError::name_invalid(
                        name,
                        self,
                        format!("segment {} ('{}'): {}", index, part, expected),
                    ));
                }
            }
        }

        Ok(uuids)
    }

    /// Returns true if `name` conforms to this format.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        let mut parts = name.split(SEPARATOR);
        let all_match = self
            .segments
            .iter()
            .all(|segment| parts.next().is_some_and(|part| segment.matches(part).is_ok()));
        all_match && parts.next().is_none()
    }

    /// Renders a name from this format and a set of bindings.
    ///
    /// Entries in `uuids` that the format does not use are ignored.
    pub fn render(&self, uuids: &Uuids) -> Result<String, FormatError> {
        let mut name = String::new();

        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                name.push(SEPARATOR);
            }
            match segment {
                Segment::Literal(token) => name.push_str(token),
                Segment::Variable(var) => {
                    let uuid = uuids.get(var).ok_or_else(|| FormatError::MissingVariable {
                        variable: var.clone(),
                    })?;
                    name.push_str(&uuid.hyphenated().to_string());
                }
            }
        }

        Ok(name)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_format(s)
    }
}

impl TryFrom<&str> for Format {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_format(s)
    }
}

impl serde::Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_format(&s).map_err(serde::de::Error::custom)
    }
}
