use crate::record::{ApplicationRecord, ApplicationStatus};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Narrows an application list to a single status before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Keeps records whose status matches exactly (case-sensitive).
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status == *status,
        }
    }

    /// Returns the matching records, preserving input order.
    pub fn apply(&self, applications: &[ApplicationRecord]) -> Vec<ApplicationRecord> {
        applications
            .iter()
            .filter(|app| self.matches(app))
            .cloned()
            .collect()
    }
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    /// `"all"` selects everything; any other value is taken as a literal status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => StatusFilter::All,
            status => StatusFilter::Only(ApplicationStatus::from(status)),
        })
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}
