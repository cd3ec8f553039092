use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A role a caller can hold.
///
/// Only [`Role::Admin`] unlocks mutating operations on the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// May create, update and delete products
    Admin,
    /// Read-only access
    User,
}

/// Returned when a role name is not recognized.
#[derive(Debug, Error)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts `ADMIN` and `USER`, case-insensitively, optionally prefixed
    /// with `ROLE_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            _ => Err(UnknownRole(s.to_owned())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        })
    }
}
