use crate::record::ApplicationRecord;
use itertools::Itertools;
use serde::Serialize;

/// Statuses that count as an offer on the dashboard.
const OFFER_STATUSES: [&str; 2] = ["offer", "accepted"];

/// Headline counts shown on the dashboard summary cards.
///
/// Unlike the flow aggregators, statuses here are compared case-insensitively,
/// and the legacy `offer` status is treated the same as `accepted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub applied: usize,
    pub interviews: usize,
    pub rejected: usize,
    pub offers: usize,
}

impl DashboardStats {
    pub fn from_applications(applications: &[ApplicationRecord]) -> Self {
        let mut stats = DashboardStats {
            applied: applications.len(),
            ..Default::default()
        };
        for status in applications.iter().map(normalized_status) {
            match status.as_str() {
                "interview" => stats.interviews += 1,
                "rejected" => stats.rejected += 1,
                s if OFFER_STATUSES.contains(&s) => stats.offers += 1,
                _ => {}
            }
        }
        stats
    }

    pub fn has_offer(&self) -> bool {
        self.offers > 0
    }
}

/// Counts records per lowercased status, in first-seen order.
pub fn status_breakdown(applications: &[ApplicationRecord]) -> Vec<(String, usize)> {
    let counts = applications.iter().map(normalized_status).counts();
    applications
        .iter()
        .map(normalized_status)
        .unique()
        .map(|status| {
            let count = counts[&status];
            (status, count)
        })
        .collect()
}

fn normalized_status(app: &ApplicationRecord) -> String {
    app.status.as_str().to_lowercase()
}
