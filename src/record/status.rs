use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// The lifecycle status of a job application, as reported by the backend.
///
/// The five known statuses are matched case-sensitively. Anything else is kept
/// verbatim in `Unknown` so callers can see exactly what was dropped or
/// defaulted. A missing or `null` status is represented as `Unknown("")`, and a
/// non-string value as `Unknown` of its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Rejected,
    Accepted,
    Withdrawn,
    Unknown(String),
}

impl ApplicationStatus {
    /// Returns the raw status string, exactly as the backend sends it.
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Withdrawn => "withdrawn",
            ApplicationStatus::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ApplicationStatus::Unknown(_))
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Unknown(String::new())
    }
}

impl From<&str> for ApplicationStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "applied" => ApplicationStatus::Applied,
            "interview" => ApplicationStatus::Interview,
            "rejected" => ApplicationStatus::Rejected,
            "accepted" => ApplicationStatus::Accepted,
            "withdrawn" => ApplicationStatus::Withdrawn,
            other => ApplicationStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(raw: String) -> Self {
        match ApplicationStatus::from(raw.as_str()) {
            ApplicationStatus::Unknown(_) => ApplicationStatus::Unknown(raw),
            known => known,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<&Value> for ApplicationStatus {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(raw) => ApplicationStatus::from(raw.as_str()),
            Value::Null => ApplicationStatus::default(),
            other => ApplicationStatus::Unknown(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(ApplicationStatus::from(&value))
    }
}
