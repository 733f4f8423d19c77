//! Gaveta Common - Shared identity and role types
//!
//! This crate provides the foundational types used across all Gaveta components:
//! - The management role model and its wire names
//! - The caller identity attached to every provider operation
//! - The operation kinds gated by authorization

use serde::{Deserialize, Serialize};

/// Management roles recognized by the configuration provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Administrator,
    ClusterAdministrator,
    ClusterOperator,
    ServiceAdministrator,
    ServiceOperator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "ADMINISTRATOR",
            Role::ClusterAdministrator => "CLUSTER_ADMINISTRATOR",
            Role::ClusterOperator => "CLUSTER_OPERATOR",
            Role::ServiceAdministrator => "SERVICE_ADMINISTRATOR",
            Role::ServiceOperator => "SERVICE_OPERATOR",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMINISTRATOR" => Ok(Role::Administrator),
            "CLUSTER_ADMINISTRATOR" => Ok(Role::ClusterAdministrator),
            "CLUSTER_OPERATOR" => Ok(Role::ClusterOperator),
            "SERVICE_ADMINISTRATOR" => Ok(Role::ServiceAdministrator),
            "SERVICE_OPERATOR" => Ok(Role::ServiceOperator),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Operation kinds gated by the authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Operation::Create),
            "read" => Ok(Operation::Read),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            _ => Err(format!("Invalid operation: {}", s)),
        }
    }
}

/// Authenticated caller on whose behalf a provider operation runs.
///
/// Authorization is decided from the attached role alone; the username is
/// carried for audit logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    pub username: String,
    pub role: Role,
}

impl CallerIdentity {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role() {
        assert_eq!(Role::Administrator.as_str(), "ADMINISTRATOR");
        assert_eq!(Role::ClusterOperator.as_str(), "CLUSTER_OPERATOR");
        assert_eq!(
            "ADMINISTRATOR".parse::<Role>().unwrap(),
            Role::Administrator
        );
        assert_eq!(
            "SERVICE_OPERATOR".parse::<Role>().unwrap(),
            Role::ServiceOperator
        );
        assert!("OPERATOR".parse::<Role>().is_err());
    }

    #[test]
    fn test_operation() {
        assert_eq!(Operation::Create.as_str(), "create");
        assert_eq!(Operation::Delete.to_string(), "delete");
        assert_eq!("update".parse::<Operation>().unwrap(), Operation::Update);
        assert!("patch".parse::<Operation>().is_err());
    }

    #[test]
    fn test_caller_identity() {
        let caller = CallerIdentity::new("admin", Role::Administrator);
        assert_eq!(caller.username, "admin");
        assert_eq!(caller.role, Role::Administrator);
    }
}
