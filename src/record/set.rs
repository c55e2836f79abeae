use super::application::ApplicationRecord;
use super::conversion::IntoRecords;
use crate::error::LoadError;
use serde_json::Value;
use std::fs;

/// An owned snapshot of application records, typically one backend response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationSet {
    records: Vec<ApplicationRecord>,
}

impl ApplicationSet {
    pub fn new(records: Vec<ApplicationRecord>) -> Self {
        Self { records }
    }

    /// Builds a set from anything convertible into records.
    pub fn from_source(source: impl IntoRecords) -> Result<Self, LoadError> {
        Ok(Self::new(source.into_records()?))
    }

    /// Parses a JSON array of applications. `null` yields an empty set.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| LoadError::JsonParseError(e.to_string()))?;
        Self::from_source(value)
    }

    /// Loads applications from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        let set = Self::from_json(&content)?;
        tracing::debug!(path, count = set.len(), "loaded applications");
        Ok(set)
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ApplicationRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
