use crate::record::{FlatRecord, RecordType};
use crate::xml::Element;

/// Plain-text children, assigned for every section even when absent
const PLAIN_FIELDS: &[(&str, &str)] = &[
    ("cms:status", "status"),
    ("cms:parentOfferingId", "parentofferingid"),
    ("cms:maxNumberofStudents", "maxstudents"),
    ("cms:numberofStudents", "numstudents"),
];

/// Children wrapping a `cms:textString`, assigned only when the child exists
const TEXT_FIELDS: &[(&str, &str)] = &[
    ("cms:title", "title"),
    ("cms:shortDescription", "shortdescription"),
    ("cms:longDescription", "longdescription"),
    ("cms:category", "category"),
    ("cms:academicSession", "session"),
    ("cms:org", "org"),
    ("cms:location", "location"),
    ("cms:notes", "notes"),
    ("cms:meeting", "meeting"),
];

/// Extract a `cms:courseSectionRecord` element
pub fn extract_course_section(section_record: &Element) -> FlatRecord {
    let mut record = FlatRecord::empty(RecordType::CourseSection);

    record.set("sourceid", section_record.text_at(&["cms:sourcedId"]));

    for section in section_record.descendants("cms:courseSection") {
        for &(tag, key) in PLAIN_FIELDS {
            record.set(key, section.text_at(&[tag]));
        }

        for &(tag, key) in TEXT_FIELDS {
            if let Some(element) = section.first(tag) {
                record.set(key, element.text_at(&["cms:textString"]));
            }
        }

        if let Some(time_frame) = section.first("cms:timeFrame") {
            record.set("begintime", time_frame.text_at(&["cms:begin"]));
            record.set("endtime", time_frame.text_at(&["cms:end"]));
        }
    }

    record
}
