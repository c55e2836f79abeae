use super::Aggregator;
use super::counts::StageCounts;
use crate::graph::{FlowGraph, FlowLink, FlowNode};
use crate::record::ApplicationRecord;
use crate::stage::Stage;
use tracing::debug;

/// Edges of the pipeline, in emission order.
const PIPELINE_EDGES: [(Stage, Stage); 4] = [
    (Stage::Applied, Stage::Interview),
    (Stage::Applied, Stage::Withdrawn),
    (Stage::Interview, Stage::Accepted),
    (Stage::Interview, Stage::Rejected),
];

/// Aggregates applications into the fixed five-stage status pipeline.
///
/// Records with an unknown status still count toward `applied` (which is the
/// total number of records) but toward no other stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageFlowAggregator;

impl StageFlowAggregator {
    /// Builds the graph from precomputed counts.
    pub fn graph_from_counts(counts: &StageCounts) -> FlowGraph {
        let nodes = Stage::ALL
            .iter()
            .filter(|stage| counts.derived(**stage) > 0)
            .map(|stage| FlowNode::new(stage.id(), stage.label(), stage.color()))
            .collect();

        let links = PIPELINE_EDGES
            .iter()
            .filter(|(source, target)| counts.derived(*source) > 0 && counts.derived(*target) > 0)
            .map(|(source, target)| FlowLink::new(source.id(), target.id(), counts.derived(*target)))
            .collect();

        FlowGraph { nodes, links }
    }
}

impl Aggregator for StageFlowAggregator {
    fn aggregate(&self, applications: &[ApplicationRecord]) -> FlowGraph {
        if applications.is_empty() {
            return FlowGraph::default();
        }

        let counts = StageCounts::tally(applications);
        if counts.unrecognized > 0 {
            debug!(
                unrecognized = counts.unrecognized,
                total = counts.total,
                "records with unknown status excluded from stage counts"
            );
        }

        let graph = Self::graph_from_counts(&counts);
        debug!(
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            "aggregated status flow"
        );
        graph
    }
}
