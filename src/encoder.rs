//! CSV encoding of flat records
//!
//! Quoting rules: a value is wrapped in double quotes when it contains a
//! comma, a double quote, a carriage return or a line feed; embedded double
//! quotes are doubled. Every line ends with `\n`.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::record::{FlatRecord, RecordType};

/// Reusable encoder producing one CSV line per call
pub struct CsvEncoder {
    writer: csv::Writer<Vec<u8>>,
}

impl CsvEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self {
            writer: Self::builder().from_writer(Vec::new()),
        }
    }

    fn builder() -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true);
        builder
    }

    /// Header line for a record type
    pub fn encode_header(&mut self, record_type: RecordType) -> Result<String, csv::Error> {
        self.encode_fields(record_type.columns().iter().map(|c| c.label))
    }

    /// Data line for one record
    pub fn encode(&mut self, record: &FlatRecord) -> Result<String, csv::Error> {
        self.encode_fields(record.values())
    }

    fn encode_fields<'a, I>(&mut self, fields: I) -> Result<String, csv::Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.writer.write_record(fields)?;
        let fresh = Self::builder().from_writer(Vec::new());
        let bytes = std::mem::replace(&mut self.writer, fresh)
            .into_inner()
            .map_err(|e| e.into_error())?;
        // Input fields are &str, so the output is always valid UTF-8
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(record_type: RecordType, values: &[(&str, &str)]) -> FlatRecord {
        let mut record = FlatRecord::empty(record_type);
        for (key, value) in values {
            record.set(key, *value);
        }
        record
    }

    #[test]
    fn test_quotes_and_commas_are_escaped() {
        let mut encoder = CsvEncoder::new();
        let record = record_with(RecordType::Membership, &[("sourceid", "Smith, \"Jr.\"")]);

        let line = encoder.encode(&record).unwrap();
        assert_eq!(line, "\"Smith, \"\"Jr.\"\"\",,,,,,,\n");
    }

    #[test]
    fn test_plain_values_are_not_quoted() {
        let mut encoder = CsvEncoder::new();
        let record = record_with(
            RecordType::Membership,
            &[("sourceid", "M-1"), ("buid", "U777"), ("status", "Active")],
        );

        assert_eq!(encoder.encode(&record).unwrap(), "M-1,,,U777,,,,Active\n");
    }

    #[test]
    fn test_blank_record_encodes_empty_fields() {
        let mut encoder = CsvEncoder::new();
        let line = encoder.encode(&FlatRecord::empty(RecordType::Group)).unwrap();
        assert_eq!(line, ",,,,,,,,\n");
        assert!(!line.contains("null"));
    }

    #[test]
    fn test_header_lines() {
        let mut encoder = CsvEncoder::new();
        assert_eq!(
            encoder.encode_header(RecordType::Membership).unwrap(),
            "Source ID,Collection ID,Membership ID,BUID,Role Type,Sub Role,Time Frame,Status\n"
        );
        assert_eq!(
            encoder.encode_header(RecordType::Group).unwrap(),
            "Source ID,Scheme,TypeValue ID,Type,Level,Org ID,Org Name,Short Description,Long Description\n"
        );
    }

    #[test]
    fn test_encoder_reuse_does_not_leak_previous_line() {
        let mut encoder = CsvEncoder::new();
        let first = record_with(RecordType::Membership, &[("sourceid", "A")]);
        let second = record_with(RecordType::Membership, &[("sourceid", "B")]);

        assert_eq!(encoder.encode(&first).unwrap(), "A,,,,,,,\n");
        assert_eq!(encoder.encode(&second).unwrap(), "B,,,,,,,\n");
    }

    #[test]
    fn test_many_lines_from_one_encoder() {
        let mut encoder = CsvEncoder::new();
        let header = encoder.encode_header(RecordType::Membership).unwrap();
        assert_eq!(header.lines().count(), 1);

        for i in 0..100 {
            let id = format!("M-{}", i);
            let record = record_with(RecordType::Membership, &[("sourceid", id.as_str())]);
            assert_eq!(encoder.encode(&record).unwrap(), format!("{},,,,,,,\n", id));
        }
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let mut encoder = CsvEncoder::new();
        let record = record_with(
            RecordType::CourseSection,
            &[
                ("sourceid", "CS,1"),
                ("title", "Say \"hi\""),
                ("notes", "line one\nline two"),
                ("meeting", "Mon\r\nWed"),
            ],
        );
        let line = encoder.encode(&record).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(line.as_bytes());
        let parsed = reader.records().next().unwrap().unwrap();
        let parsed: Vec<&str> = parsed.iter().collect();
        let original: Vec<&str> = record.values().collect();
        assert_eq!(parsed, original);
    }
}
