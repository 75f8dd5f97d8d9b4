use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }

    /// Capitalized form shown next to the user's name.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

/// Fields that only exist for some roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum RoleProfile {
    Admin,
    Doctor {
        license: Option<String>,
        specialization: Option<String>,
        hospital: Option<String>,
    },
    Patient {
        age: Option<u32>,
        /// Constitution recorded at a previous visit, e.g. "Vata-Pitta".
        constitution: Option<String>,
    },
}

impl RoleProfile {
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Admin => RoleProfile::Admin,
            Role::Doctor => RoleProfile::Doctor {
                license: None,
                specialization: None,
                hospital: None,
            },
            Role::Patient => RoleProfile::Patient {
                age: None,
                constitution: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRecord {
    pub id: u32,
    pub email: String,
    /// Stored and compared verbatim. Never serialized, so records read
    /// back from JSON carry an empty secret.
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub secret: String,
    pub role: Role,
    pub name: String,
    pub mobile: String,
    pub profile: RoleProfile,
}

/// Input to registration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Registration {
    pub role: Role,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub secret: String,
}
