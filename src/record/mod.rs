//! # Record Types
//!
//! The four IMS Learning Information Services record schemas handled by this
//! crate, and the flat, CSV-shaped view of one record.
//!
//! | Type | Code | Root tag |
//! |------|------|----------|
//! | Person | `PRSN` | `pms:personRecord` |
//! | Group | `GRP` | `gms:groupRecord` |
//! | Membership | `MEMB` | `mms:membershipRecord` |
//! | Course section | `CSEC` | `cms:courseSectionRecord` |
//!
//! Export files carry their type in the file name, e.g.
//! `PRSN2024-01-01T00.00.00.000000Z.xml`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

pub use error::RecordError;
pub use flat::FlatRecord;

pub mod columns;
mod error;
mod flat;


/// Export file name prefix: record type code followed by the export timestamp
const FILE_NAME_PATTERN: &str =
    r"^([A-Z]{3,4})[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}\.[0-9]{2}\.[0-9]{2}\.[0-9]{6}Z";

/// One output column: stable key plus human-readable header label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Field key used in JSON output and lookups
    pub key: &'static str,
    /// CSV header label
    pub label: &'static str,
}

/// The four supported record schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RecordType {
    /// `pms:personRecord`
    Person,
    /// `gms:groupRecord`
    Group,
    /// `mms:membershipRecord`
    Membership,
    /// `cms:courseSectionRecord`
    CourseSection,
}

impl RecordType {
    /// All record types, in filter order
    pub const ALL: [RecordType; 4] = [
        RecordType::Person,
        RecordType::Group,
        RecordType::CourseSection,
        RecordType::Membership,
    ];

    /// Short code used in export and output file names
    pub fn code(&self) -> &'static str {
        match self {
            RecordType::Person => "PRSN",
            RecordType::Group => "GRP",
            RecordType::Membership => "MEMB",
            RecordType::CourseSection => "CSEC",
        }
    }

    /// Qualified name of the record's root element
    pub fn root_tag(&self) -> &'static str {
        match self {
            RecordType::Person => "pms:personRecord",
            RecordType::Group => "gms:groupRecord",
            RecordType::Membership => "mms:membershipRecord",
            RecordType::CourseSection => "cms:courseSectionRecord",
        }
    }

    /// Text a record line starts with: `<` followed by the root tag
    pub fn line_prefix(&self) -> &'static str {
        match self {
            RecordType::Person => "<pms:personRecord",
            RecordType::Group => "<gms:groupRecord",
            RecordType::Membership => "<mms:membershipRecord",
            RecordType::CourseSection => "<cms:courseSectionRecord",
        }
    }

    /// Ordered output columns
    pub fn columns(&self) -> &'static [Column] {
        match self {
            RecordType::Person => &columns::PERSON,
            RecordType::Group => &columns::GROUP,
            RecordType::Membership => &columns::MEMBERSHIP,
            RecordType::CourseSection => &columns::COURSE_SECTION,
        }
    }

    /// Resolve a type from its short code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Resolve a type from a document's root element name (exact match)
    pub fn from_root_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.root_tag() == tag)
    }

    /// Resolve a type from an export file name such as
    /// `GRP2024-01-01T00.00.00.000000Z_export.xml`
    pub fn from_file_name(file_name: &str) -> Result<Self, RecordError> {
        let mismatch = || RecordError::FileNameMismatch {
            file_name: file_name.to_string(),
        };

        let captures = file_name_regex().captures(file_name).ok_or_else(mismatch)?;
        let code = captures.get(1).map(|m| m.as_str()).ok_or_else(mismatch)?;
        Self::from_code(code).ok_or_else(mismatch)
    }

    /// Resolve a type from the final component of a path
    pub fn from_path(path: &Path) -> Result<Self, RecordError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_file_name(&file_name)
    }

    /// Whether a line (after trimming) starts with any known record prefix
    pub fn is_record_line(line: &str) -> bool {
        let trimmed = line.trim();
        Self::ALL
            .iter()
            .any(|t| trimmed.starts_with(t.line_prefix()))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecordType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.to_ascii_uppercase()).ok_or_else(|| RecordError::UnknownCode(s.to_string()))
    }
}

fn file_name_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(FILE_NAME_PATTERN).expect("file name pattern is valid"))
}
