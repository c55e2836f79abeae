//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the jobflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use jobflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let applications = ApplicationSet::from_file("path/to/applications.json")?;
//! let interviews = StatusFilter::Only(ApplicationStatus::Interview).apply(applications.records());
//!
//! let graph = AggregatorChoice::Companies.build().aggregate(&interviews);
//! println!("{}", GraphFormatter::format_graph(&graph));
//! # Ok(())
//! # }
//! ```

// Aggregation
pub use crate::aggregator::{
    Aggregator, AggregatorChoice, CompanyGroupAggregator, StageCounts, StageFlowAggregator,
    process_applications, process_applications_with_companies,
};

// Records and their conversion
pub use crate::record::{ApplicationRecord, ApplicationSet, ApplicationStatus, IntoRecords};

// Graph output
pub use crate::graph::{FlowGraph, FlowLink, FlowNode};
pub use crate::stage::{Stage, UnknownStatusPolicy};

// Filtering and summaries
pub use crate::filter::StatusFilter;
pub use crate::stats::{DashboardStats, status_breakdown};

// Error types
pub use crate::error::{ConversionError, LoadError};

// Text formatting
pub use crate::report::GraphFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
