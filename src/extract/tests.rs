use super::*;
use crate::xml::parse_fragment;

const PERSON: &str = r#"<pms:personRecord xmlns:pms="http://www.imsglobal.org/services/lis/pms2p0/wsdl11/sync/imspms_v2p0">
  <pms:sourcedGUID><pms:sourcedId>U12345</pms:sourcedId></pms:sourcedGUID>
  <pms:person>
    <pms:formname>
      <pms:instanceIdentifier><pms:textString>FormName-Full-PRI</pms:textString></pms:instanceIdentifier>
      <pms:formattedName><pms:textString>Jane Q Doe</pms:textString></pms:formattedName>
    </pms:formname>
    <pms:formname>
      <pms:instanceIdentifier><pms:textString>FormName-Preferred-PRF</pms:textString></pms:instanceIdentifier>
      <pms:formattedName><pms:textString>Janie Doe</pms:textString></pms:formattedName>
    </pms:formname>
    <pms:name>
      <pms:instanceIdentifier><pms:textString>Full-PRI</pms:textString></pms:instanceIdentifier>
      <pms:partName>
        <pms:instanceIdentifier><pms:textString>Full-PRI-First</pms:textString></pms:instanceIdentifier>
        <pms:instanceValue><pms:textString>Jane</pms:textString></pms:instanceValue>
      </pms:partName>
      <pms:partName>
        <pms:instanceIdentifier><pms:textString>Full-PRI-Last</pms:textString></pms:instanceIdentifier>
        <pms:instanceValue><pms:textString>Doe</pms:textString></pms:instanceValue>
      </pms:partName>
    </pms:name>
    <pms:name>
      <pms:instanceIdentifier><pms:textString>Preferred-PRF</pms:textString></pms:instanceIdentifier>
      <pms:partName>
        <pms:instanceIdentifier><pms:textString>Preferred-PRF-First</pms:textString></pms:instanceIdentifier>
        <pms:instanceValue><pms:textString>Janie</pms:textString></pms:instanceValue>
      </pms:partName>
    </pms:name>
    <pms:contactinfo>
      <pms:instanceIdentifier><pms:textString>EmailPrimary-BUEM</pms:textString></pms:instanceIdentifier>
      <pms:contactinfoValue><pms:textString>jdoe@example.edu</pms:textString></pms:contactinfoValue>
    </pms:contactinfo>
    <pms:contactinfo>
      <pms:instanceIdentifier><pms:textString>Telephone-CELL</pms:textString></pms:instanceIdentifier>
      <pms:contactinfoValue><pms:textString>555-0100</pms:textString></pms:contactinfoValue>
    </pms:contactinfo>
    <pms:demographics>
      <pms:gender>F</pms:gender>
      <pms:demographicInfo>
        <pms:instanceIdentifier><pms:textString>PlaceofBirth</pms:textString></pms:instanceIdentifier>
        <pms:instanceValue><pms:textString>Boston, MA</pms:textString></pms:instanceValue>
      </pms:demographicInfo>
      <pms:eventDate>
        <pms:instanceIdentifier><pms:textString>Birth</pms:textString></pms:instanceIdentifier>
        <pms:instanceValue><pms:textString>2001-04-02</pms:textString></pms:instanceValue>
      </pms:eventDate>
    </pms:demographics>
  </pms:person>
</pms:personRecord>"#;

const GROUP: &str = "<gms:groupRecord><gms:sourcedGUID><gms:sourcedId>G-100</gms:sourcedId></gms:sourcedGUID>\
<gms:group><gms:groupType><gms:scheme><gms:textString>Org</gms:textString></gms:scheme>\
<gms:typevalue><gms:id>TV1</gms:id><gms:type><gms:textString>Dept</gms:textString></gms:type>\
<gms:level><gms:textString>2</gms:textString></gms:level></gms:typevalue></gms:groupType>\
<gms:org><gms:orgName><gms:textString>Physics</gms:textString></gms:orgName><gms:id>ORG7</gms:id></gms:org>\
<gms:description><gms:shortDescription>PHY</gms:shortDescription><gms:longDescription>Department of Physics</gms:longDescription></gms:description>\
</gms:group></gms:groupRecord>";

const MEMBERSHIP: &str = "<mms:membershipRecord><mms:sourcedGUID><mms:sourcedId>M-1</mms:sourcedId></mms:sourcedGUID>\
<mms:membership><mms:collectionSourcedId>CS-9</mms:collectionSourcedId><mms:membershipIdType>courseSection</mms:membershipIdType>\
<mms:member><mms:personSourcedId>U777</mms:personSourcedId><mms:role><mms:roleType>Learner</mms:roleType>\
<mms:subRole>Auditor</mms:subRole><mms:timeFrame>2024</mms:timeFrame><mms:status>Active</mms:status></mms:role></mms:member>\
</mms:membership></mms:membershipRecord>";

const COURSE_SECTION: &str = "<cms:courseSectionRecord><cms:sourcedGUID><cms:sourcedId>CS-9</cms:sourcedId></cms:sourcedGUID>\
<cms:courseSection><cms:title><cms:textString>Intro, Physics</cms:textString></cms:title><cms:status>Active</cms:status>\
<cms:parentOfferingId>PO-3</cms:parentOfferingId><cms:category><cms:textString>LEC</cms:textString></cms:category>\
<cms:maxNumberofStudents>120</cms:maxNumberofStudents><cms:numberofStudents>98</cms:numberofStudents>\
<cms:academicSession><cms:textString>2024 Fall</cms:textString></cms:academicSession>\
<cms:timeFrame><cms:begin>2024-09-03</cms:begin><cms:end>2024-12-20</cms:end></cms:timeFrame>\
<cms:location><cms:textString>SCI 101</cms:textString></cms:location></cms:courseSection></cms:courseSectionRecord>";

fn root_of(xml: &str) -> Element {
    parse_fragment(xml).unwrap().root().unwrap().clone()
}

#[test]
fn test_empty_records_have_full_blank_key_set() {
    for record_type in RecordType::ALL {
        let element = Element::new(record_type.root_tag());
        let record = extract(record_type, &element);

        assert_eq!(record.record_type(), record_type);
        assert!(record.is_blank(), "{} record not blank", record_type);
        let keys: Vec<&str> = record.iter().map(|(c, _)| c.key).collect();
        let expected: Vec<&str> = record_type.columns().iter().map(|c| c.key).collect();
        assert_eq!(keys, expected);
    }
}

#[test]
fn test_person_extraction() {
    let record = extract_person(&root_of(PERSON));

    assert_eq!(record.get("buid"), Some("U12345"));
    assert_eq!(record.get("full_name"), Some("Jane Q Doe"));
    assert_eq!(record.get("preferred_name"), Some("Janie Doe"));
    assert_eq!(record.get("full_first"), Some("Jane"));
    assert_eq!(record.get("full_last"), Some("Doe"));
    assert_eq!(record.get("full_middle"), Some(""));
    assert_eq!(record.get("preferred_first"), Some("Janie"));
    assert_eq!(record.get("email"), Some("jdoe@example.edu"));
    assert_eq!(record.get("telephone_cell"), Some("555-0100"));
    assert_eq!(record.get("telephone"), Some(""));
    assert_eq!(record.get("gender"), Some("F"));
    assert_eq!(record.get("birthplace"), Some("Boston, MA"));
    assert_eq!(record.get("birthdate"), Some("2001-04-02"));
    assert_eq!(record.get("marital_status"), Some(""));
}

#[test]
fn test_person_with_only_full_form_name() {
    let xml = "<pms:personRecord><pms:sourcedId>U12345</pms:sourcedId><pms:formname>\
<pms:instanceIdentifier><pms:textString>FormName-Full-PRI</pms:textString></pms:instanceIdentifier>\
<pms:formattedName><pms:textString>Jane Q Doe</pms:textString></pms:formattedName></pms:formname></pms:personRecord>";
    let record = extract_person(&root_of(xml));

    let values: Vec<&str> = record.values().collect();
    assert_eq!(values[0], "U12345");
    assert_eq!(record.get("full_name"), Some("Jane Q Doe"));
    for key in [
        "email",
        "telephone",
        "telephone_home",
        "telephone_cell",
        "telephone_current",
        "telephone_work",
        "birthplace",
        "birthdate",
        "gender",
        "marital_status",
    ] {
        assert_eq!(record.get(key), Some(""), "{} should be empty", key);
    }
}

#[test]
fn test_unmatched_discriminator_is_ignored() {
    let xml = "<pms:personRecord><pms:contactinfo>\
<pms:instanceIdentifier><pms:textString>Fax-WORK</pms:textString></pms:instanceIdentifier>\
<pms:contactinfoValue><pms:textString>555-0199</pms:textString></pms:contactinfoValue>\
</pms:contactinfo></pms:personRecord>";
    let record = extract_person(&root_of(xml));
    assert!(record.is_blank());
}

#[test]
fn test_discriminated_pick_last_match_wins() {
    let lookup = Discriminated {
        container: "e",
        identifier: &["k"],
        payload: &["v"],
    };
    let scope = root_of("<r><e><k>a</k><v>1</v></e><e><k>b</k><v>2</v></e><e><k>a</k><v>3</v></e></r>");

    assert_eq!(lookup.pick(&scope, "a").as_deref(), Some("3"));
    assert_eq!(lookup.pick(&scope, "b").as_deref(), Some("2"));
    assert_eq!(lookup.pick(&scope, "c"), None);
}

#[test]
fn test_discriminated_apply_missing_payload_is_empty() {
    let lookup = Discriminated {
        container: "pms:contactinfo",
        identifier: &["pms:instanceIdentifier", "pms:textString"],
        payload: &["pms:contactinfoValue", "pms:textString"],
    };
    let scope = root_of("<p><pms:contactinfo><pms:instanceIdentifier><pms:textString>EmailPrimary-BUEM</pms:textString>\
</pms:instanceIdentifier></pms:contactinfo></p>");
    let mut record = FlatRecord::empty(RecordType::Person);
    record.set("email", "stale");

    lookup.apply(&scope, &[("EmailPrimary-BUEM", "email")], &mut record);
    assert_eq!(record.get("email"), Some(""));
}

#[test]
fn test_group_extraction() {
    let record = extract_group(&root_of(GROUP));
    let values: Vec<&str> = record.values().collect();
    assert_eq!(
        values,
        vec!["G-100", "Org", "TV1", "Dept", "2", "ORG7", "Physics", "PHY", "Department of Physics"]
    );
}

#[test]
fn test_membership_extraction() {
    let record = extract_membership(&root_of(MEMBERSHIP));
    let values: Vec<&str> = record.values().collect();
    assert_eq!(
        values,
        vec!["M-1", "CS-9", "courseSection", "U777", "Learner", "Auditor", "2024", "Active"]
    );
}

#[test]
fn test_membership_without_member() {
    let xml = "<mms:membershipRecord><mms:sourcedId>M-2</mms:sourcedId><mms:membership>\
<mms:collectionSourcedId>CS-1</mms:collectionSourcedId></mms:membership></mms:membershipRecord>";
    let record = extract_membership(&root_of(xml));
    assert_eq!(record.get("collectionsourceid"), Some("CS-1"));
    assert_eq!(record.get("buid"), Some(""));
    assert_eq!(record.get("roletype"), Some(""));
}

#[test]
fn test_course_section_extraction() {
    let record = extract_course_section(&root_of(COURSE_SECTION));

    assert_eq!(record.get("sourceid"), Some("CS-9"));
    assert_eq!(record.get("title"), Some("Intro, Physics"));
    assert_eq!(record.get("parentofferingid"), Some("PO-3"));
    assert_eq!(record.get("status"), Some("Active"));
    assert_eq!(record.get("category"), Some("LEC"));
    assert_eq!(record.get("numstudents"), Some("98"));
    assert_eq!(record.get("maxstudents"), Some("120"));
    assert_eq!(record.get("session"), Some("2024 Fall"));
    assert_eq!(record.get("begintime"), Some("2024-09-03"));
    assert_eq!(record.get("endtime"), Some("2024-12-20"));
    assert_eq!(record.get("location"), Some("SCI 101"));
    assert_eq!(record.get("org"), Some(""));
    assert_eq!(record.get("notes"), Some(""));
}

#[test]
fn test_extraction_is_idempotent() {
    for (record_type, xml) in [
        (RecordType::Person, PERSON),
        (RecordType::Group, GROUP),
        (RecordType::Membership, MEMBERSHIP),
        (RecordType::CourseSection, COURSE_SECTION),
    ] {
        let element = root_of(xml);
        assert_eq!(extract(record_type, &element), extract(record_type, &element));
    }
}
