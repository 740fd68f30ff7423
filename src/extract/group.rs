use crate::record::{FlatRecord, RecordType};
use crate::xml::Element;

const TEXT: &str = "gms:textString";

/// Extract a `gms:groupRecord` element
pub fn extract_group(group_record: &Element) -> FlatRecord {
    let mut record = FlatRecord::empty(RecordType::Group);

    record.set("sourceid", group_record.text_at(&["gms:sourcedId"]));

    for group in group_record.descendants("gms:group") {
        if let Some(group_type) = group.first("gms:groupType") {
            record.set("scheme", group_type.text_at(&["gms:scheme", TEXT]));

            if let Some(type_value) = group_type.first("gms:typevalue") {
                record.set("typevalueid", type_value.text_at(&["gms:id"]));
                record.set("type", type_value.text_at(&["gms:type", TEXT]));
                record.set("level", type_value.text_at(&["gms:level", TEXT]));
            }
        }

        if let Some(org) = group.first("gms:org") {
            record.set("orgname", org.text_at(&["gms:orgName", TEXT]));
            record.set("orgid", org.text_at(&["gms:id"]));
        }

        if let Some(description) = group.first("gms:description") {
            record.set("shortdescription", description.text_at(&["gms:shortDescription"]));
            record.set("longdescription", description.text_at(&["gms:longDescription"]));
        }
    }

    record
}
