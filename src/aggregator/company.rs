use super::Aggregator;
use crate::graph::{FlowGraph, FlowLink, FlowNode};
use crate::record::ApplicationRecord;
use crate::stage::{NEUTRAL_COLOR, UnknownStatusPolicy};
use ahash::AHashSet;
use tracing::debug;

/// Aggregates applications into `company -> status` links.
///
/// Each distinct company and each distinct raw status becomes one node, in
/// first-seen order. Every application contributes its own link of value 1;
/// identical company/status pairs are not merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyGroupAggregator {
    pub unknown_status: UnknownStatusPolicy,
}

impl CompanyGroupAggregator {
    pub fn new(unknown_status: UnknownStatusPolicy) -> Self {
        Self { unknown_status }
    }
}

impl Aggregator for CompanyGroupAggregator {
    fn aggregate(&self, applications: &[ApplicationRecord]) -> FlowGraph {
        let mut graph = FlowGraph::default();
        let mut seen: AHashSet<String> = AHashSet::new();
        let mut dropped = 0usize;

        for app in applications {
            let Some(color) = self.unknown_status.status_color(&app.status) else {
                dropped += 1;
                continue;
            };

            let company_id = format!("company-{}", app.company_name);
            let status_id = format!("status-{}", app.status.as_str());

            if seen.insert(company_id.clone()) {
                graph.nodes.push(FlowNode::new(
                    company_id.clone(),
                    app.company_name.clone(),
                    NEUTRAL_COLOR,
                ));
            }
            if seen.insert(status_id.clone()) {
                graph.nodes.push(FlowNode::new(
                    status_id.clone(),
                    capitalize(app.status.as_str()),
                    color,
                ));
            }

            graph.links.push(FlowLink::new(company_id, status_id, 1));
        }

        if dropped > 0 {
            debug!(dropped, "applications with unknown status skipped");
        }
        graph
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
