//! Segment matchers.
//!
//! A format is a sequence of segments, each either a fixed lowercase
//! literal (`stores`) or a named variable (`{store}`) that binds a UUID.

use std::fmt;

use uuid::Uuid;

/// Length of the canonical hyphenated UUID form.
const UUID_LEN: usize = 36;

/// Byte offsets of the hyphens in the canonical UUID form (8-4-4-4-12).
const UUID_HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// A single matcher in a format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matches exactly this lowercase token.
    Literal(String),

    /// Matches any canonical UUID and binds it under this name.
    Variable(String),
}

impl Segment {
    /// Classifies a format segment, or returns `None` if it is neither a
    /// literal (`[a-z]+`) nor a variable (`{[a-z]+}`).
    pub fn classify(segment: &str) -> Option<Self> {
        if is_lower_word(segment) {
            return Some(Segment::Literal(segment.to_string()));
        }

        let name = segment.strip_prefix('{')?.strip_suffix('}')?;
        is_lower_word(name).then(|| Segment::Variable(name.to_string()))
    }

    /// Returns true for literal segments.
    pub fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }

    /// Returns true for variable segments.
    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable(_))
    }

    /// Returns the variable name, if this is a variable segment.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Segment::Variable(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }

    /// Matches a name segment against this matcher.
    ///
    /// On success, variables yield the bound UUID and literals yield `None`.
    /// On failure, returns a description of what was expected.
    pub fn matches(&self, segment: &str) -> Result<Option<Uuid>, String> {
        match self {
            Segment::Literal(token) if token == segment => Ok(None),
            Segment::Literal(token) => Err(format!("expected literal '{}'", token)),
            Segment::Variable(name) => parse_canonical_uuid(segment)
                .map(Some)
                .ok_or_else(|| format!("expected canonical UUID for variable {{{}}}", name)),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(token) => f.write_str(token),
            Segment::Variable(name) => write!(f, "{{{}}}", name),
        }
    }
}

fn is_lower_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Parses a UUID only if it is in canonical lowercase hyphenated form.
///
/// `Uuid::parse_str` alone also accepts uppercase digits, braces, `urn:uuid:`
/// prefixes and the 32-digit simple form.
pub(crate) fn parse_canonical_uuid(s: &str) -> Option<Uuid> {
    if s.len() != UUID_LEN {
        return None;
    }

    let shape_ok = s.bytes().enumerate().all(|(i, b)| {
        if UUID_HYPHENS.contains(&i) {
            b == b'-'
        } else {
            matches!(b, b'0'..=b'9' | b'a'..=b'f')
        }
    });
    if !shape_ok {
        return None;
    }

    Uuid::parse_str(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "78da9161-aef1-49ed-bc92-0f136c95308f";

    #[test]
    fn test_classify_literal() {
        assert_eq!(
            Segment::classify("stores"),
            Some(Segment::Literal("stores".to_string()))
        );
    }

    #[test]
    fn test_classify_variable() {
        assert_eq!(
            Segment::classify("{store}"),
            Some(Segment::Variable("store".to_string()))
        );
    }

    #[test]
    fn test_classify_rejects() {
        for bad in [
            "", "{}", "{", "}", "Stores", "store1", "store-id", "store_id", "{Store}",
            "{store", "store}", "{{store}}", "{ store }", " stores", "stores ", "é",
        ] {
            assert_eq!(Segment::classify(bad), None, "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_display_is_canonical_token() {
        assert_eq!(Segment::Literal("users".into()).to_string(), "users");
        assert_eq!(Segment::Variable("user".into()).to_string(), "{user}");
    }

    #[test]
    fn test_literal_matches_exactly() {
        let seg = Segment::Literal("users".into());
        assert_eq!(seg.matches("users"), Ok(None));
        assert!(seg.matches("Users").is_err());
        assert!(seg.matches("user").is_err());
        assert!(seg.matches("").is_err());
    }

    #[test]
    fn test_variable_matches_uuid() {
        let seg = Segment::Variable("user".into());
        let expected = Uuid::parse_str(UUID).unwrap();
        assert_eq!(seg.matches(UUID), Ok(Some(expected)));
    }

    #[test]
    fn test_canonical_uuid_rejects_alternate_forms() {
        assert!(parse_canonical_uuid(UUID).is_some());

        assert!(parse_canonical_uuid(&UUID.to_uppercase()).is_none());
        assert!(parse_canonical_uuid(&format!("{{{}}}", UUID)).is_none());
        assert!(parse_canonical_uuid(&format!("urn:uuid:{}", UUID)).is_none());
        assert!(parse_canonical_uuid(&UUID.replace('-', "")).is_none());
        assert!(parse_canonical_uuid(&format!(" {}", &UUID[1..])).is_none());
        assert!(parse_canonical_uuid("78da9161-aef1-49ed-bc92-0f136c95308g").is_none());
        assert!(parse_canonical_uuid("78da9161aef1-49ed-bc92-0f136c95308f-").is_none());
        assert!(parse_canonical_uuid("not-a-uuid").is_none());
        assert!(parse_canonical_uuid("").is_none());
    }

    #[test]
    fn test_variable_mismatch_names_variable() {
        let seg = Segment::Variable("user".into());
        let err = seg.matches("not-a-uuid").unwrap_err();
        assert!(err.contains("{user}"));
    }
}
