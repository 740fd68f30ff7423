use crate::record::{FlatRecord, RecordType};
use crate::xml::Element;

/// Extract a `mms:membershipRecord` element
pub fn extract_membership(membership_record: &Element) -> FlatRecord {
    let mut record = FlatRecord::empty(RecordType::Membership);

    record.set("sourceid", membership_record.text_at(&["mms:sourcedId"]));

    for membership in membership_record.descendants("mms:membership") {
        record.set(
            "collectionsourceid",
            membership.text_at(&["mms:collectionSourcedId"]),
        );
        record.set(
            "membershipidtype",
            membership.text_at(&["mms:membershipIdType"]),
        );

        let Some(member) = membership.first("mms:member") else {
            continue;
        };
        record.set("buid", member.text_at(&["mms:personSourcedId"]));

        if let Some(role) = member.first("mms:role") {
            record.set("roletype", role.text_at(&["mms:roleType"]));
            record.set("subrole", role.text_at(&["mms:subRole"]));
            record.set("timeframe", role.text_at(&["mms:timeFrame"]));
            record.set("status", role.text_at(&["mms:status"]));
        }
    }

    record
}
