use crate::record::ApplicationRecord;
use crate::stage::Stage;

/// Raw and derived per-stage tallies for a set of applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    /// Every record, whatever its status.
    pub total: u64,
    pub applied: u64,
    pub interview: u64,
    pub rejected: u64,
    pub accepted: u64,
    pub withdrawn: u64,
    /// Records whose status matched no stage.
    pub unrecognized: u64,
}

impl StageCounts {
    /// Tallies the raw status of every record.
    pub fn tally(applications: &[ApplicationRecord]) -> Self {
        let mut counts = StageCounts {
            total: applications.len() as u64,
            ..Default::default()
        };
        for app in applications {
            match Stage::from_status(&app.status) {
                Some(Stage::Applied) => counts.applied += 1,
                Some(Stage::Interview) => counts.interview += 1,
                Some(Stage::Rejected) => counts.rejected += 1,
                Some(Stage::Accepted) => counts.accepted += 1,
                Some(Stage::Withdrawn) => counts.withdrawn += 1,
                None => counts.unrecognized += 1,
            }
        }
        counts
    }

    /// Number of records whose literal status is `stage`.
    pub fn raw(&self, stage: Stage) -> u64 {
        match stage {
            Stage::Applied => self.applied,
            Stage::Interview => self.interview,
            Stage::Rejected => self.rejected,
            Stage::Accepted => self.accepted,
            Stage::Withdrawn => self.withdrawn,
        }
    }

    /// Flow-accounting count for `stage`.
    ///
    /// `Applied` is every application. `Interview` also absorbs accepted and
    /// rejected records, since both outcomes pass through an interview.
    pub fn derived(&self, stage: Stage) -> u64 {
        match stage {
            Stage::Applied => self.total,
            Stage::Interview => self.interview + self.accepted + self.rejected,
            Stage::Rejected | Stage::Accepted | Stage::Withdrawn => self.raw(stage),
        }
    }
}
