use crate::graph::FlowGraph;

/// Formats flow graphs into human-readable text.
pub struct GraphFormatter;

impl GraphFormatter {
    /// One line per link, `Source -> Target: value`, using node labels.
    pub fn format_graph(graph: &FlowGraph) -> String {
        if graph.links.is_empty() {
            return match graph.nodes.as_slice() {
                [] => "No flow data".to_string(),
                nodes => nodes
                    .iter()
                    .map(|n| format!("{} (no outgoing flow)", n.label))
                    .collect::<Vec<_>>()
                    .join("\n"),
            };
        }

        graph
            .links
            .iter()
            .map(|link| {
                format!(
                    "{} -> {}: {}",
                    Self::label_for(graph, &link.source),
                    Self::label_for(graph, &link.target),
                    link.value
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Falls back to the raw id when the node is missing from the graph.
    fn label_for<'a>(graph: &'a FlowGraph, id: &'a str) -> &'a str {
        graph.node(id).map_or(id, |n| n.label.as_str())
    }
}
