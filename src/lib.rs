//! # Jobflow - Application Status Flow Aggregation
//!
//! **Jobflow** turns a snapshot of job application records into the
//! `{nodes, links}` graph consumed by Sankey-style flow diagrams. Every
//! aggregator is a pure function of its input: no I/O, no shared state, safe
//! to call on every re-render from as many threads as you like.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse the backend's application list with
//!     `ApplicationSet::from_json`, or implement `IntoRecords` for your own
//!     response type.
//! 2.  **Narrow It (optional)**: Apply a `StatusFilter` to keep a single status.
//! 3.  **Aggregate**: Pick an `Aggregator`. `StageFlowAggregator` produces the
//!     fixed five-stage pipeline; `CompanyGroupAggregator` links each company
//!     to the statuses of its applications.
//! 4.  **Render**: Serialize the `FlowGraph` with `serde_json` and hand it to
//!     the diagram component, or print it with `GraphFormatter`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"[
//!         {"id": 1, "company_name": "Acme", "status": "applied"},
//!         {"id": 2, "company_name": "Globex", "status": "interview"},
//!         {"id": 3, "company_name": "Initech", "status": "accepted"}
//!     ]"#;
//!     let applications = ApplicationSet::from_json(json)?;
//!
//!     let graph = StageFlowAggregator.aggregate(applications.records());
//!     println!("{}", GraphFormatter::format_graph(&graph));
//!     // Applied -> Interview: 2
//!     // Interview -> Accepted: 1
//!
//!     println!("{}", serde_json::to_string(&graph)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Unknown statuses
//!
//! Status strings are matched case-sensitively against the five known stages.
//! `StageFlowAggregator` drops anything else from every stage-specific count
//! (it still counts toward the `applied` total), while `CompanyGroupAggregator`
//! keeps such records and draws their status node in a neutral gray. Both
//! behaviors are named by `UnknownStatusPolicy`.

pub mod aggregator;
pub mod error;
pub mod filter;
pub mod graph;
pub mod prelude;
pub mod record;
pub mod report;
pub mod stage;
pub mod stats;
