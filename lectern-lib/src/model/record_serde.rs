//! Serde support for [`Record`].
//!
//! Records read from and write to plain JSON objects. Nested objects become
//! nested records, RFC 3339 strings become `Value::DateTime`.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object representing a row")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            record.fields.insert(key, Value::from(value));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_object() {
        let json = r#"{"id": 4, "author": {"name": "Ada"}, "tags": ["x", "y"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_int("id").unwrap(), Some(4));
        assert_eq!(
            record.resolve("author.name").and_then(Value::as_str),
            Some("Ada")
        );
        assert_eq!(record.get_array("tags").unwrap().map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<Record>("[1, 2]").is_err());
    }

    #[test]
    fn test_serialize_keeps_nulls_and_dates() {
        let json = r#"{"created_at":"2024-01-02T03:04:05+00:00","note":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.get_string("note").unwrap(), None);

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"note\":null"));
        assert!(out.contains("\"created_at\":\"2024-01-02T03:04:05+00:00\""));
    }
}
