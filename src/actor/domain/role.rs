//! Organisational roles carried by actors.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an actor within the training organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs the organisation; approves and assigns work.
    Manager,
    /// Coordinates courses; approves and assigns work.
    Coordinator,
    /// Delivers training sessions.
    Instructor,
    /// Transports staff and equipment.
    Driver,
}

impl Role {
    /// All known roles, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Manager,
        Self::Coordinator,
        Self::Instructor,
        Self::Driver,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Coordinator => "coordinator",
            Self::Instructor => "instructor",
            Self::Driver => "driver",
        }
    }

    /// Returns `true` for the roles that approve and assign work by default.
    ///
    /// Deployments can widen or narrow this set through
    /// [`crate::config::WorkflowPolicy`].
    #[must_use]
    pub const fn is_approver(self) -> bool {
        matches!(self, Self::Manager | Self::Coordinator)
    }

    /// Returns `true` for every role that is not an approver.
    #[must_use]
    pub const fn is_worker(self) -> bool {
        !self.is_approver()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "manager" => Ok(Self::Manager),
            "coordinator" => Ok(Self::Coordinator),
            "instructor" => Ok(Self::Instructor),
            "driver" => Ok(Self::Driver),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
