use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

// Role checks are exercised with a plain-text "token": the caller's roles,
// form-encoded into the `Authorization: Bearer <...>` header. No signing is
// involved, so any combination of roles is easy to construct.
#[derive(Serialize, Deserialize, Default)]
pub struct Permissions {
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Display for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_html_form::to_string(self).unwrap())
    }
}

impl FromStr for Permissions {
    type Err = serde_html_form::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let deserializer = serde_html_form::Deserializer::new(form_urlencoded::parse(s.as_bytes()));
        Self::deserialize(deserializer)
    }
}

/// A bearer token granting exactly `roles`.
pub fn token(roles: &[&str]) -> String {
    Permissions {
        roles: roles.iter().map(|role| role.to_string()).collect(),
    }
    .to_string()
}
