use super::Permissions;
use headers::{Authorization, authorization::Bearer};
use store_core::{
    models::Role,
    ports::{Application, ProductRepository},
};
use time::OffsetDateTime;

#[derive(Clone)]
pub struct TestApp<R> {
    repository: R,
}

impl<R> TestApp<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Decode the plain-text permissions carried in the bearer token.
    fn permissions(&self, context: &Authorization<Bearer>) -> Option<Permissions> {
        context.0.token().parse().ok()
    }
}

impl<R: ProductRepository + Send + Sync> Application for TestApp<R> {
    // The token is a form-encoded list of roles, see `Permissions`
    type Context = Authorization<Bearer>;

    type Repository = R;

    fn database(&self) -> &Self::Repository {
        &self.repository
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    async fn can_manage_products(&self, context: &Self::Context) -> bool {
        self.permissions(context)
            .map(|p| {
                p.roles
                    .iter()
                    .any(|role| matches!(role.parse::<Role>(), Ok(Role::Admin)))
            })
            .unwrap_or(false)
    }
}
