//! Fixed column layouts for each record type

use super::Column;

const fn col(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

/// Person record columns (`pms:personRecord`)
pub static PERSON: [Column; 29] = [
    col("buid", "BUID"),
    col("full_name", "Form Name [Full]"),
    col("preferred_name", "Form Name [Preferred]"),
    col("full_first", "Full Name [First]"),
    col("full_middle", "Full Name [Middle]"),
    col("full_last", "Full Name [Last]"),
    col("full_given", "Full Name [Given]"),
    col("full_family", "Full Name [Family]"),
    col("full_surname", "Full Name [Surname]"),
    col("full_suffix", "Full Name [Suffix]"),
    col("full_prefix", "Full Name [Prefix]"),
    col("preferred_first", "Preferred Name [First]"),
    col("preferred_middle", "Preferred Name [Middle]"),
    col("preferred_last", "Preferred Name [Last]"),
    col("preferred_given", "Preferred Name [Given]"),
    col("preferred_family", "Preferred Name [Family]"),
    col("preferred_surname", "Preferred Name [Surname]"),
    col("preferred_suffix", "Preferred Name [Suffix]"),
    col("preferred_prefix", "Preferred Name [Prefix]"),
    col("email", "Email [Primary]"),
    col("telephone", "Telephone"),
    col("telephone_home", "Telephone [Home]"),
    col("telephone_cell", "Telephone [Cell]"),
    col("telephone_current", "Telephone [Current]"),
    col("telephone_work", "Telephone [Work]"),
    col("birthplace", "Place of Birth"),
    col("birthdate", "Date of Birth"),
    col("gender", "Gender"),
    col("marital_status", "Marital Status"),
];

/// Group record columns (`gms:groupRecord`)
pub static GROUP: [Column; 9] = [
    col("sourceid", "Source ID"),
    col("scheme", "Scheme"),
    col("typevalueid", "TypeValue ID"),
    col("type", "Type"),
    col("level", "Level"),
    col("orgid", "Org ID"),
    col("orgname", "Org Name"),
    col("shortdescription", "Short Description"),
    col("longdescription", "Long Description"),
];

/// Membership record columns (`mms:membershipRecord`)
pub static MEMBERSHIP: [Column; 8] = [
    col("sourceid", "Source ID"),
    col("collectionsourceid", "Collection ID"),
    col("membershipidtype", "Membership ID"),
    col("buid", "BUID"),
    col("roletype", "Role Type"),
    col("subrole", "Sub Role"),
    col("timeframe", "Time Frame"),
    col("status", "Status"),
];

/// Course section record columns (`cms:courseSectionRecord`)
pub static COURSE_SECTION: [Column; 16] = [
    col("sourceid", "Source ID"),
    col("title", "Title"),
    col("parentofferingid", "ParentOffering ID"),
    col("shortdescription", "Short Description"),
    col("longdescription", "Long Description"),
    col("status", "Status"),
    col("category", "Category"),
    col("numstudents", "Number of Students"),
    col("maxstudents", "Max Number of Students"),
    col("session", "Academic Session"),
    col("org", "Org"),
    col("begintime", "Begin"),
    col("endtime", "End"),
    col("location", "Location"),
    col("meeting", "Meeting"),
    col("notes", "Notes"),
];
