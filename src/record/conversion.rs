use super::application::ApplicationRecord;
use crate::error::ConversionError;
use serde_json::Value;

/// A trait for caller-owned data that can be turned into application records.
///
/// The aggregators only ever see `ApplicationRecord`s. Implement this on your
/// own response or export types to plug them in; absent input (`None`, JSON
/// `null`) converts to an empty list rather than an error.
///
/// # Example
///
/// ```rust,no_run
/// use jobflow::prelude::*;
/// use jobflow::error::ConversionError;
///
/// struct Row { company: String, state: String }
/// struct Export { rows: Vec<Row> }
///
/// impl IntoRecords for Export {
///     fn into_records(self) -> std::result::Result<Vec<ApplicationRecord>, ConversionError> {
///         Ok(self
///             .rows
///             .into_iter()
///             .map(|row| ApplicationRecord::new(row.company, row.state))
///             .collect())
///     }
/// }
/// ```
pub trait IntoRecords {
    /// Consumes the object and converts it into application records.
    fn into_records(self) -> Result<Vec<ApplicationRecord>, ConversionError>;
}

impl IntoRecords for Vec<ApplicationRecord> {
    fn into_records(self) -> Result<Vec<ApplicationRecord>, ConversionError> {
        Ok(self)
    }
}

impl IntoRecords for Option<Vec<ApplicationRecord>> {
    fn into_records(self) -> Result<Vec<ApplicationRecord>, ConversionError> {
        Ok(self.unwrap_or_default())
    }
}

impl IntoRecords for Value {
    fn into_records(self) -> Result<Vec<ApplicationRecord>, ConversionError> {
        match self {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_json::from_value(item).map_err(|e| {
                        ConversionError::ValidationError(format!(
                            "application at index {}: {}",
                            index, e
                        ))
                    })
                })
                .collect(),
            other => Err(ConversionError::NotAList {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
