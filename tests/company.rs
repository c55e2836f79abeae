//! Tests for the company -> status aggregation.
mod common;
use common::*;
use jobflow::prelude::*;

#[test]
fn test_empty_input() {
    assert_eq!(process_applications_with_companies(None), FlowGraph::default());
    assert_eq!(
        CompanyGroupAggregator::default().aggregate(&[]),
        FlowGraph::default()
    );
}

#[test]
fn test_nodes_are_deduplicated_in_first_seen_order() {
    let graph = CompanyGroupAggregator::default().aggregate(&create_company_applications());

    assert_eq!(
        node_ids(&graph),
        vec![
            "company-Google",
            "status-applied",
            "company-Meta",
            "status-interview",
            "status-rejected",
            "company-OpenAI",
        ]
    );
}

#[test]
fn test_one_link_per_application() {
    let apps = create_company_applications();
    let graph = CompanyGroupAggregator::default().aggregate(&apps);

    assert_eq!(graph.links.len(), apps.len());
    assert!(graph.links.iter().all(|l| l.value == 1));

    let repeated = graph
        .links
        .iter()
        .filter(|l| l.source == "company-Google" && l.target == "status-applied")
        .count();
    assert_eq!(repeated, 2);
}

#[test]
fn test_status_labels_and_colors() {
    let graph = CompanyGroupAggregator::default().aggregate(&create_company_applications());

    assert_eq!(
        graph.node("status-rejected"),
        Some(&FlowNode::new("status-rejected", "Rejected", "#dc3545"))
    );
    assert_eq!(
        graph.node("company-Meta"),
        Some(&FlowNode::new("company-Meta", "Meta", "#6c757d"))
    );
}

#[test]
fn test_unknown_status_falls_back_to_gray() {
    let apps = vec![ApplicationRecord::new("Hooli", "ghosted")];
    let graph = CompanyGroupAggregator::default().aggregate(&apps);

    assert_eq!(
        graph.node("status-ghosted"),
        Some(&FlowNode::new("status-ghosted", "Ghosted", "#6c757d"))
    );
    assert_eq!(graph.links, vec![FlowLink::new("company-Hooli", "status-ghosted", 1)]);
}

#[test]
fn test_drop_policy_skips_unknown_statuses() {
    let apps = vec![
        ApplicationRecord::new("Hooli", "ghosted"),
        ApplicationRecord::new("Initech", "interview"),
    ];
    let graph = CompanyGroupAggregator::new(UnknownStatusPolicy::Drop).aggregate(&apps);

    assert_eq!(node_ids(&graph), vec!["company-Initech", "status-interview"]);
    assert_eq!(graph.links.len(), 1);
}

#[test]
fn test_aggregator_choice_builds_matching_strategy() {
    let apps = create_company_applications();
    assert_eq!(
        AggregatorChoice::Companies.build().aggregate(&apps),
        process_applications_with_companies(Some(&apps))
    );
    assert_eq!(
        AggregatorChoice::Stages.build().aggregate(&apps),
        process_applications(Some(&apps))
    );
}
