use serde::Serialize;
use serde_json::Value;

/// One notification, in the `standard`/`version`/`event`/`data` envelope
/// shape the registry also mirrors to its log output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub standard: String,
    pub version: String,
    pub event: String,
    pub data: Value,
}

impl EventRecord {
    /// Convenience accessor for a string field of `data`.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    pub fn data_u64(&self, key: &str) -> Option<u64> {
        self.data.get(key).and_then(Value::as_u64)
    }
}

/// Ordered, append-only notification log. Records are never dropped or
/// reordered; a record exists only for operations that committed.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub(crate) fn record(&mut self, record: EventRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    pub fn of_kind<'a>(&'a self, event: &'a str) -> impl Iterator<Item = &'a EventRecord> {
        self.records.iter().filter(move |r| r.event == event)
    }
}
