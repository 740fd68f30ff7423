use super::Discriminated;
use crate::record::{FlatRecord, RecordType};
use crate::xml::Element;

const IDENTIFIER: &[&str] = &["pms:instanceIdentifier", "pms:textString"];
const INSTANCE_VALUE: &[&str] = &["pms:instanceValue", "pms:textString"];

const FORM_NAMES: Discriminated = Discriminated {
    container: "pms:formname",
    identifier: IDENTIFIER,
    payload: &["pms:formattedName", "pms:textString"],
};

const NAME_PARTS: Discriminated = Discriminated {
    container: "pms:partName",
    identifier: IDENTIFIER,
    payload: INSTANCE_VALUE,
};

const CONTACT_INFO: Discriminated = Discriminated {
    container: "pms:contactinfo",
    identifier: IDENTIFIER,
    payload: &["pms:contactinfoValue", "pms:textString"],
};

const DEMOGRAPHIC_INFO: Discriminated = Discriminated {
    container: "pms:demographicInfo",
    identifier: IDENTIFIER,
    payload: INSTANCE_VALUE,
};

const EVENT_DATES: Discriminated = Discriminated {
    container: "pms:eventDate",
    identifier: IDENTIFIER,
    payload: INSTANCE_VALUE,
};

const FORM_NAME_FIELDS: &[(&str, &str)] = &[
    ("FormName-Full-PRI", "full_name"),
    ("FormName-Preferred-PRF", "preferred_name"),
];

const NAME_PART_FIELDS: &[(&str, &str)] = &[
    ("Full-PRI-First", "full_first"),
    ("Full-PRI-Middle", "full_middle"),
    ("Full-PRI-Last", "full_last"),
    ("Full-PRI-Given", "full_given"),
    ("Full-PRI-Family", "full_family"),
    ("Full-PRI-Surname", "full_surname"),
    ("Full-PRI-Suffix", "full_suffix"),
    ("Full-PRI-Prefix", "full_prefix"),
    ("Preferred-PRF-First", "preferred_first"),
    ("Preferred-PRF-Middle", "preferred_middle"),
    ("Preferred-PRF-Last", "preferred_last"),
    ("Preferred-PRF-Given", "preferred_given"),
    ("Preferred-PRF-Family", "preferred_family"),
    ("Preferred-PRF-Surname", "preferred_surname"),
    ("Preferred-PRF-Suffix", "preferred_suffix"),
    ("Preferred-PRF-Prefix", "preferred_prefix"),
];

const CONTACT_FIELDS: &[(&str, &str)] = &[
    ("EmailPrimary-BUEM", "email"),
    ("Telephone-BUAL", "telephone"),
    ("Telephone-HOME", "telephone_home"),
    ("Telephone-CELL", "telephone_cell"),
    ("Telephone-CRNT", "telephone_current"),
    ("Telephone-WORK", "telephone_work"),
];

const DEMOGRAPHIC_FIELDS: &[(&str, &str)] = &[
    ("PlaceofBirth", "birthplace"),
    ("MaritalStatus", "marital_status"),
];

/// Extract a `pms:personRecord` element
pub fn extract_person(person: &Element) -> FlatRecord {
    let mut record = FlatRecord::empty(RecordType::Person);

    record.set("buid", person.text_at(&["pms:sourcedId"]));

    FORM_NAMES.apply(person, FORM_NAME_FIELDS, &mut record);
    for name in person.descendants("pms:name") {
        NAME_PARTS.apply(name, NAME_PART_FIELDS, &mut record);
    }
    CONTACT_INFO.apply(person, CONTACT_FIELDS, &mut record);

    for demographics in person.descendants("pms:demographics") {
        record.set("gender", demographics.text_at(&["pms:gender"]));
        DEMOGRAPHIC_INFO.apply(demographics, DEMOGRAPHIC_FIELDS, &mut record);
        if let Some(birthdate) = EVENT_DATES.pick(demographics, "Birth") {
            record.set("birthdate", birthdate);
        }
    }

    record
}
