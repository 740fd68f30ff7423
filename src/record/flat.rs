use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Column, RecordType};

/// Flat, ordered field view of one record.
///
/// Holds exactly one value per column of its record type, in column order.
/// Fields that were never set are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    record_type: RecordType,
    values: Vec<String>,
}

impl FlatRecord {
    /// Record with every field empty
    pub fn empty(record_type: RecordType) -> Self {
        Self {
            record_type,
            values: vec![String::new(); record_type.columns().len()],
        }
    }

    /// Record type this record belongs to
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Value for a column key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index_of(key).map(|i| self.values[i].as_str())
    }

    /// Set a column value; keys that are not part of the record type are ignored
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        match self.index_of(key) {
            Some(i) => self.values[i] = value.into(),
            None => log::debug!("Ignoring unknown {} field '{}'", self.record_type, key),
        }
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Column/value pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'static Column, &str)> {
        self.record_type
            .columns()
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// True when no field carries a value
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.record_type.columns().iter().position(|c| c.key == key)
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column.key, value)?;
        }
        map.end()
    }
}
