use serde::Serialize;
use serde_json::{Map, Value};

use super::{EventLog, EventRecord, PREFIX, STANDARD, VERSION};

pub(crate) struct EventBuilder {
    event: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(event: &'static str) -> Self {
        Self {
            event,
            data: Map::new(),
        }
    }

    pub(crate) fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.data.insert(key.to_string(), value);
        self
    }

    pub(crate) fn field_opt(self, key: &str, value: Option<impl Serialize>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub(crate) fn emit(self, log: &mut EventLog) {
        let record = EventRecord {
            standard: STANDARD.to_string(),
            version: VERSION.to_string(),
            event: self.event.to_string(),
            data: Value::Object(self.data),
        };
        if let Ok(json) = serde_json::to_string(&record) {
            tracing::debug!(target: "registry_events", "{}{}", PREFIX, json);
        }
        log.record(record);
    }
}
