//! # resname-format
//!
//! Resource name formats: a small path grammar for naming schemes such as
//! `stores/{store}/products/{product}`.
//!
//! ## Grammar
//!
//! A format is a `/`-separated list of segments. Each segment is either:
//! - a literal: one or more lowercase ASCII letters (`stores`)
//! - a variable: a lowercase name in braces (`{store}`), bound to a UUID
//!
//! Variable names are unique within a format. There are no optional,
//! repeated, or wildcard segments, and matching is case-sensitive.
//!
//! ## Names
//!
//! A name is an instance of a format where every variable is replaced by a
//! UUID in canonical form (lowercase, hyphenated 8-4-4-4-12):
//!
//! ```
//! use resname_format::parse_format;
//!
//! let format = parse_format("stores/{store}/settings")?;
//! let uuids = format.parse("stores/78da9161-aef1-49ed-bc92-0f136c95308f/settings")?;
//! assert_eq!(format.render(&uuids)?, "stores/78da9161-aef1-49ed-bc92-0f136c95308f/settings");
//! # Ok::<(), resname_format::FormatError>(())
//! ```

mod error;
mod format;
mod macros;
mod segment;

pub use error::FormatError;
pub use format::{must_parse_format, parse_format, Format, Uuids, SEPARATOR};
pub use segment::Segment;

/// Re-export uuid for consumers building [`Uuids`] maps.
pub use uuid::Uuid;
