//! Application implementation with JWT-based authorization.
//!
//! Reading the catalog needs no credentials. Mutations need a bearer token
//! signed with the server's HMAC secret and carrying the admin role in its
//! `roles` claim.

use headers::{Authorization, authorization::Bearer};
use jwt_simple::{
    claims::JWTClaims,
    prelude::{HS256Key, MACLike},
};
use serde::{Deserialize, Serialize};
use store_core::{models::Role, ports::Application};
use store_sqlite::Db;
use time::OffsetDateTime;

/// The served application: a SQLite catalog behind HS256-signed tokens.
#[derive(Clone)]
pub struct DemoApp {
    /// Database connection for persistent storage
    pub db: Db,
    /// HMAC key for JWT token verification
    pub key: HS256Key,
}

impl DemoApp {
    /// Extract and verify JWT claims from the authorization header.
    fn claims(&self, context: &Authorization<Bearer>) -> Option<JWTClaims<CustomJWTClaims>> {
        let token = context.0.token();
        self.key.verify_token::<CustomJWTClaims>(token, None).ok()
    }
}

impl Application for DemoApp {
    type Context = Authorization<Bearer>;
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    async fn can_manage_products(&self, context: &Self::Context) -> bool {
        // unrecognized role names are ignored rather than rejected
        self.claims(context)
            .map(|claims| {
                claims
                    .custom
                    .roles
                    .iter()
                    .any(|role| matches!(role.parse::<Role>(), Ok(Role::Admin)))
            })
            .unwrap_or(false)
    }
}

/// Custom claims structure for JWT tokens.
///
/// Contains application-specific claims beyond standard JWT claims.
#[derive(Serialize, Deserialize, Default)]
pub struct CustomJWTClaims {
    /// Roles granted to the token holder, e.g. `ADMIN` or `ROLE_USER`.
    #[serde(default)]
    pub roles: Vec<String>,
}
