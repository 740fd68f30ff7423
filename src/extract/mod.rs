//! # Record Extractors
//!
//! Pure projections from one record element to a [`FlatRecord`].
//!
//! Every lookup falls back to an empty string, so a record with missing
//! optional sub-elements still produces a full row. The schemas repeat a
//! generic container (name parts, contact entries, demographic entries)
//! and tell the copies apart with an embedded identifier; all extractors
//! read those through [`Discriminated`].

use crate::record::{FlatRecord, RecordType};
use crate::xml::Element;

mod course_section;
mod group;
mod membership;
mod person;

#[cfg(test)]
mod tests;

pub use course_section::extract_course_section;
pub use group::extract_group;
pub use membership::extract_membership;
pub use person::extract_person;

/// Extract a record element using the extractor for `record_type`
pub fn extract(record_type: RecordType, element: &Element) -> FlatRecord {
    match record_type {
        RecordType::Person => extract_person(element),
        RecordType::Group => extract_group(element),
        RecordType::Membership => extract_membership(element),
        RecordType::CourseSection => extract_course_section(element),
    }
}

/// Repeated container whose copies are selected by an identifier value.
///
/// For a person's contact entries, the container is `pms:contactinfo`, the
/// identifier sits at `pms:instanceIdentifier/pms:textString` and the
/// payload at `pms:contactinfoValue/pms:textString`.
#[derive(Debug, Clone, Copy)]
pub struct Discriminated {
    /// Container element name
    pub container: &'static str,
    /// Path from a container to its identifier text
    pub identifier: &'static [&'static str],
    /// Path from a container to its payload text
    pub payload: &'static [&'static str],
}

impl Discriminated {
    /// Payload of the last container under `scope` whose identifier equals `value`
    pub fn pick(&self, scope: &Element, value: &str) -> Option<String> {
        scope
            .descendants(self.container)
            .filter(|container| container.text_at(self.identifier) == value)
            .last()
            .map(|container| container.text_at(self.payload))
    }

    /// Fill `record` from every container under `scope`.
    ///
    /// `targets` maps identifier values to column keys. Later containers
    /// overwrite earlier ones with the same identifier.
    pub fn apply(&self, scope: &Element, targets: &[(&str, &str)], record: &mut FlatRecord) {
        for container in scope.descendants(self.container) {
            let identifier = container.text_at(self.identifier);
            for &(_, key) in targets.iter().filter(|(value, _)| *value == identifier) {
                record.set(key, container.text_at(self.payload));
            }
        }
    }
}
