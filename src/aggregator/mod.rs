//! Aggregators turn a snapshot of application records into a [`FlowGraph`].
//!
//! All aggregators are pure: they hold no state between calls, never fail,
//! and return the empty graph for empty or absent input.

use crate::graph::FlowGraph;
use crate::record::ApplicationRecord;

mod company;
mod counts;
mod stages;

pub use company::CompanyGroupAggregator;
pub use counts::StageCounts;
pub use stages::StageFlowAggregator;

/// A strategy for aggregating application records into a flow graph.
pub trait Aggregator: Send + Sync {
    /// Builds a fresh graph from the given records.
    fn aggregate(&self, applications: &[ApplicationRecord]) -> FlowGraph;

    /// Like `aggregate`, treating absent input as empty.
    fn aggregate_opt(&self, applications: Option<&[ApplicationRecord]>) -> FlowGraph {
        match applications {
            Some(records) => self.aggregate(records),
            None => FlowGraph::default(),
        }
    }
}

/// The available aggregation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregatorChoice {
    /// Status pipeline: applied -> interview -> accepted/rejected, applied -> withdrawn.
    #[default]
    Stages,
    /// One company node and one status node per distinct value, a link per application.
    Companies,
}

impl AggregatorChoice {
    pub fn build(self) -> Box<dyn Aggregator> {
        match self {
            AggregatorChoice::Stages => Box::new(StageFlowAggregator),
            AggregatorChoice::Companies => Box::new(CompanyGroupAggregator::default()),
        }
    }
}

/// Aggregates applications into the five-stage status pipeline.
pub fn process_applications(applications: Option<&[ApplicationRecord]>) -> FlowGraph {
    StageFlowAggregator.aggregate_opt(applications)
}

/// Aggregates applications into company -> status links.
pub fn process_applications_with_companies(
    applications: Option<&[ApplicationRecord]>,
) -> FlowGraph {
    CompanyGroupAggregator::default().aggregate_opt(applications)
}
