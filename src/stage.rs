use crate::record::ApplicationStatus;
use std::fmt;

/// Display color used for anything that has no stage-specific color.
pub const NEUTRAL_COLOR: &str = "#6c757d";

/// One stage of the fixed application pipeline.
///
/// ```text
/// applied -> interview -> accepted
///                      -> rejected
/// applied -> withdrawn
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Applied,
    Interview,
    Rejected,
    Accepted,
    Withdrawn,
}

impl Stage {
    /// All stages, in node emission order.
    pub const ALL: [Stage; 5] = [
        Stage::Applied,
        Stage::Interview,
        Stage::Rejected,
        Stage::Accepted,
        Stage::Withdrawn,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::Interview => "interview",
            Stage::Rejected => "rejected",
            Stage::Accepted => "accepted",
            Stage::Withdrawn => "withdrawn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Interview => "Interview",
            Stage::Rejected => "Rejected",
            Stage::Accepted => "Accepted",
            Stage::Withdrawn => "Withdrawn",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Stage::Applied => "#17a2b8",
            Stage::Interview => "#ffc107",
            Stage::Rejected => "#dc3545",
            Stage::Accepted => "#28a745",
            Stage::Withdrawn => NEUTRAL_COLOR,
        }
    }

    /// Maps a record status onto its stage. Unknown statuses have no stage.
    pub fn from_status(status: &ApplicationStatus) -> Option<Stage> {
        match status {
            ApplicationStatus::Applied => Some(Stage::Applied),
            ApplicationStatus::Interview => Some(Stage::Interview),
            ApplicationStatus::Rejected => Some(Stage::Rejected),
            ApplicationStatus::Accepted => Some(Stage::Accepted),
            ApplicationStatus::Withdrawn => Some(Stage::Withdrawn),
            ApplicationStatus::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What an aggregator does with a record whose status is not one of the five
/// known stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownStatusPolicy {
    /// Leave the record out of every stage-specific count and node.
    Drop,
    /// Keep the record and draw its status in the neutral color.
    #[default]
    FallbackColor,
}

impl UnknownStatusPolicy {
    /// Looks up the display color for a status under this policy.
    ///
    /// Returns `None` only for an unknown status under `Drop`.
    pub fn status_color(self, status: &ApplicationStatus) -> Option<&'static str> {
        match (Stage::from_status(status), self) {
            (Some(stage), _) => Some(stage.color()),
            (None, UnknownStatusPolicy::FallbackColor) => Some(NEUTRAL_COLOR),
            (None, UnknownStatusPolicy::Drop) => None,
        }
    }
}
