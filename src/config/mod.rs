//! Workflow policy configuration.
//!
//! The policy decides which roles may assign work to others and which roles
//! may receive assigned work. Deployments ship it as a TOML file:
//!
//! ```toml
//! approver_roles = ["manager", "coordinator"]
//! assignable_roles = ["instructor", "driver"]
//! ```
//!
//! Missing keys fall back to [`WorkflowPolicy::default`].

use crate::actor::domain::Role;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs, io};
use thiserror::Error;

/// Environment variable naming the policy file read by
/// [`WorkflowPolicy::from_env`].
pub const POLICY_PATH_ENV: &str = "EMBER_WORKFLOW_POLICY";

/// Errors returned while loading a workflow policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The policy file could not be read.
    #[error("failed to read workflow policy {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The policy document is not valid TOML for this schema.
    #[error("invalid workflow policy: {0}")]
    Parse(#[from] toml::de::Error),

    /// A role list that must name at least one role is empty.
    #[error("workflow policy field '{0}' must name at least one role")]
    EmptyRoleSet(&'static str),
}

/// Role sets driving assignment eligibility.
///
/// Deserialising always goes through [`WorkflowPolicy::new`], so empty role
/// sets are rejected whatever the serde format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkflowPolicy")]
pub struct WorkflowPolicy {
    approver_roles: Vec<Role>,
    assignable_roles: Vec<Role>,
}

/// Unvalidated policy document.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawWorkflowPolicy {
    approver_roles: Vec<Role>,
    assignable_roles: Vec<Role>,
}

impl Default for RawWorkflowPolicy {
    fn default() -> Self {
        let WorkflowPolicy {
            approver_roles,
            assignable_roles,
        } = WorkflowPolicy::default();
        Self {
            approver_roles,
            assignable_roles,
        }
    }
}

impl TryFrom<RawWorkflowPolicy> for WorkflowPolicy {
    type Error = ConfigError;

    fn try_from(raw: RawWorkflowPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.approver_roles, raw.assignable_roles)
    }
}

impl Default for WorkflowPolicy {
    fn default() -> Self {
        Self {
            approver_roles: Role::ALL.into_iter().filter(|role| role.is_approver()).collect(),
            assignable_roles: vec![Role::Instructor, Role::Driver],
        }
    }
}

impl WorkflowPolicy {
    /// Creates a policy from explicit role sets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRoleSet`] when either set is empty.
    pub fn new(
        approver_roles: impl IntoIterator<Item = Role>,
        assignable_roles: impl IntoIterator<Item = Role>,
    ) -> Result<Self, ConfigError> {
        let policy = Self {
            approver_roles: dedup(approver_roles),
            assignable_roles: dedup(assignable_roles),
        };
        policy.validate()
    }

    /// Parses a policy from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::EmptyRoleSet`] when a role list is explicitly empty.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let raw: RawWorkflowPolicy = toml::from_str(document)?;
        Self::try_from(raw)
    }

    /// Reads and parses a policy file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Self::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let document = fs::read_to_string(path_ref).map_err(|err| ConfigError::Io {
            path: path_ref.to_path_buf(),
            source: err,
        })?;
        let policy = Self::from_toml_str(&document)?;
        tracing::debug!(path = %path_ref.display(), "loaded workflow policy");
        Ok(policy)
    }

    /// Loads the policy named by [`POLICY_PATH_ENV`], or the defaults when
    /// the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::from_path`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(POLICY_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Roles allowed to assign tasks to other actors.
    #[must_use]
    pub fn approver_roles(&self) -> &[Role] {
        &self.approver_roles
    }

    /// Roles that may receive assigned tasks.
    #[must_use]
    pub fn assignable_roles(&self) -> &[Role] {
        &self.assignable_roles
    }

    /// Returns `true` when actors with `role` may assign tasks.
    #[must_use]
    pub fn can_assign(&self, role: Role) -> bool {
        self.approver_roles.contains(&role)
    }

    /// Returns `true` when actors with `role` may receive assigned tasks.
    #[must_use]
    pub fn is_assignable(&self, role: Role) -> bool {
        self.assignable_roles.contains(&role)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.approver_roles.is_empty() {
            return Err(ConfigError::EmptyRoleSet("approver_roles"));
        }
        if self.assignable_roles.is_empty() {
            return Err(ConfigError::EmptyRoleSet("assignable_roles"));
        }
        Ok(self)
    }
}

fn dedup(roles: impl IntoIterator<Item = Role>) -> Vec<Role> {
    let mut unique = Vec::new();
    for role in roles {
        if !unique.contains(&role) {
            unique.push(role);
        }
    }
    unique
}
