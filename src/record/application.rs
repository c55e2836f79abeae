use super::status::ApplicationStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const COMPANY_KEY: &str = "company_name";
const STATUS_KEY: &str = "status";

/// A single job application record as returned by the backend.
///
/// The original JSON object is kept as-is and written back out unchanged, so
/// explicit nulls, absent keys and fields the crate does not model all
/// survive a round trip. `company_name` and `status` are lenient typed views
/// over that object: a missing, `null` or non-string value never fails a load.
/// Editing either field is reflected on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ApplicationRecord {
    pub company_name: String,
    pub status: ApplicationStatus,
    fields: Map<String, Value>,
}

impl ApplicationRecord {
    /// Creates a bare record with the given company and status.
    pub fn new(company_name: impl Into<String>, status: impl Into<ApplicationStatus>) -> Self {
        let company_name = company_name.into();
        let status = status.into();
        let mut fields = Map::new();
        fields.insert(COMPANY_KEY.to_string(), Value::from(company_name.as_str()));
        fields.insert(STATUS_KEY.to_string(), Value::from(status.as_str()));
        Self {
            company_name,
            status,
            fields,
        }
    }

    pub fn with_id(self, id: impl Into<Value>) -> Self {
        self.with_field("id", id)
    }

    pub fn with_position(self, position: impl Into<String>) -> Self {
        self.with_field("position", position.into())
    }

    pub fn with_applied_date(self, applied_date: impl Into<String>) -> Self {
        self.with_field("applied_date", applied_date.into())
    }

    /// Sets an arbitrary pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The backend id, `Value::Null` when absent.
    pub fn id(&self) -> &Value {
        self.fields.get("id").unwrap_or(&Value::Null)
    }

    pub fn position(&self) -> Option<&str> {
        self.fields.get("position").and_then(Value::as_str)
    }

    pub fn applied_date(&self) -> Option<&str> {
        self.fields.get("applied_date").and_then(Value::as_str)
    }

    /// Any field of the original object, exactly as received.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<Map<String, Value>> for ApplicationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            company_name: company_from(&fields),
            status: status_from(&fields),
            fields,
        }
    }
}

impl From<ApplicationRecord> for Map<String, Value> {
    fn from(record: ApplicationRecord) -> Self {
        let mut fields = record.fields;
        if company_from(&fields) != record.company_name {
            fields.insert(COMPANY_KEY.to_string(), Value::from(record.company_name));
        }
        if status_from(&fields) != record.status {
            fields.insert(STATUS_KEY.to_string(), Value::from(record.status.as_str()));
        }
        fields
    }
}

fn company_from(fields: &Map<String, Value>) -> String {
    match fields.get(COMPANY_KEY) {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn status_from(fields: &Map<String, Value>) -> ApplicationStatus {
    fields
        .get(STATUS_KEY)
        .map(ApplicationStatus::from)
        .unwrap_or_default()
}
