//! Integration tests for jobflow
//!
//! End-to-end tests that go from a backend JSON response to a rendered graph.
//!
mod common;
use common::*;
use jobflow::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_backend_response_to_stage_graph() {
        let applications =
            ApplicationSet::from_json(BACKEND_RESPONSE_JSON).expect("Failed to parse applications");
        assert_eq!(applications.len(), 4);

        let graph = StageFlowAggregator.aggregate(applications.records());

        // 4 total; interview (1) + accepted (1); ghosted and missing are dropped.
        assert_eq!(node_ids(&graph), vec!["applied", "interview", "accepted"]);
        assert_eq!(link_value(&graph, "applied", "interview"), Some(2));
        assert_eq!(link_value(&graph, "interview", "accepted"), Some(1));
        assert_eq!(graph.links.len(), 2);
    }

    #[test]
    fn test_backend_response_to_company_graph() {
        let applications =
            ApplicationSet::from_json(BACKEND_RESPONSE_JSON).expect("Failed to parse applications");
        let graph = process_applications_with_companies(Some(applications.records()));

        assert_eq!(graph.links.len(), 4);
        assert_eq!(
            graph.node("status-ghosted").map(|n| n.color.as_str()),
            Some("#6c757d")
        );
        assert_eq!(graph.node("status-").map(|n| n.label.as_str()), Some(""));
    }

    #[test]
    fn test_graph_json_shape() {
        let applications = ApplicationSet::from_json(BACKEND_RESPONSE_JSON).unwrap();
        let graph = StageFlowAggregator.aggregate(applications.records());
        let json = serde_json::to_value(&graph).unwrap();

        assert_eq!(
            json["nodes"][0],
            serde_json::json!({"id": "applied", "label": "Applied", "color": "#17a2b8"})
        );
        assert_eq!(
            json["links"][0],
            serde_json::json!({"source": "applied", "target": "interview", "value": 2})
        );

        let parsed: FlowGraph = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, graph);
    }

    #[test]
    fn test_null_response_gives_empty_graph() {
        let applications = ApplicationSet::from_json("null").unwrap();
        assert!(applications.is_empty());

        let graph = StageFlowAggregator.aggregate(applications.records());
        assert!(graph.is_empty());
        assert_eq!(
            serde_json::to_string(&graph).unwrap(),
            r#"{"nodes":[],"links":[]}"#
        );
    }

    #[test]
    fn test_filter_then_aggregate() {
        let applications = ApplicationSet::from_json(BACKEND_RESPONSE_JSON).unwrap();
        let interviews = StatusFilter::Only(ApplicationStatus::Interview).apply(applications.records());

        let graph = StageFlowAggregator.aggregate(&interviews);
        assert_eq!(node_ids(&graph), vec!["applied", "interview"]);
        assert_eq!(link_value(&graph, "applied", "interview"), Some(1));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("jobflow-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("applications.json");
        fs::write(&path, BACKEND_RESPONSE_JSON).unwrap();

        let applications = ApplicationSet::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(applications.len(), 4);

        let missing = ApplicationSet::from_file(dir.join("nope.json").to_str().unwrap());
        assert!(matches!(missing, Err(LoadError::Io { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_aggregator_is_shareable_across_threads() {
        let applications = ApplicationSet::from_json(BACKEND_RESPONSE_JSON).unwrap();
        let aggregator = AggregatorChoice::Stages.build();
        let expected = aggregator.aggregate(applications.records());

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| aggregator.aggregate(applications.records())))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
