//! Common test utilities for building application records.
use jobflow::prelude::*;

/// Builds records with the given statuses, numbered from 1, all at one company.
#[allow(dead_code)]
pub fn records_with_statuses(statuses: &[&str]) -> Vec<ApplicationRecord> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| ApplicationRecord::new("Acme", *status).with_id(i as u64 + 1))
        .collect()
}

/// The six-record pipeline with one application in every outcome.
///
/// Derived counts: applied 6, interview 4, accepted 1, rejected 1, withdrawn 1.
#[allow(dead_code)]
pub fn create_full_pipeline() -> Vec<ApplicationRecord> {
    records_with_statuses(&[
        "applied",
        "interview",
        "interview",
        "accepted",
        "rejected",
        "withdrawn",
    ])
}

/// A small list spread over several companies, including a repeat pair.
#[allow(dead_code)]
pub fn create_company_applications() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord::new("Google", "applied").with_id(1),
        ApplicationRecord::new("Meta", "interview").with_id(2),
        ApplicationRecord::new("Google", "rejected").with_id(3),
        ApplicationRecord::new("OpenAI", "applied").with_id(4),
        ApplicationRecord::new("Google", "applied").with_id(5),
    ]
}

/// Looks up the value of a link, if present.
#[allow(dead_code)]
pub fn link_value(graph: &FlowGraph, source: &str, target: &str) -> Option<u64> {
    graph
        .links
        .iter()
        .find(|l| l.source == source && l.target == target)
        .map(|l| l.value)
}

#[allow(dead_code)]
pub fn node_ids(graph: &FlowGraph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.id.as_str()).collect()
}

/// A backend response as the applications endpoint returns it.
#[allow(dead_code)]
pub const BACKEND_RESPONSE_JSON: &str = r#"[
    {
        "id": 11,
        "company_name": "Google",
        "position": "Frontend Developer",
        "job_url": "https://example.com/jobs/11",
        "status": "interview",
        "applied_date": "2025-08-01",
        "notes": null,
        "salary_range": "120k-150k",
        "location": "Remote"
    },
    {
        "id": 12,
        "company_name": "Meta",
        "position": "Product Designer",
        "status": "accepted",
        "applied_date": "2025-07-20"
    },
    {
        "id": 13,
        "company_name": "OpenAI",
        "position": "Research Engineer",
        "status": "ghosted",
        "applied_date": "2025-09-01"
    },
    {
        "id": 14,
        "company_name": "Google",
        "position": "Backend Engineer",
        "applied_date": "2025-09-03"
    }
]"#;
