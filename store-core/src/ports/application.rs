use super::ProductRepository;
use std::future::Future;
use time::OffsetDateTime;

/// The top-level trait an application implements to be served.
///
/// It ties together the repository, the clock and the authorization scheme.
/// `Context` is whatever the transport extracts from a request to identify
/// the caller (for HTTP, typically the `Authorization` header).
pub trait Application {
    /// Request-level credentials
    type Context;

    /// The product service
    type Repository: ProductRepository;

    /// Access the repository.
    fn database(&self) -> &Self::Repository;

    /// The current time, used to stamp new products.
    fn now(&self) -> OffsetDateTime;

    /// Whether the caller may create, update or delete products.
    fn can_manage_products(&self, context: &Self::Context) -> impl Future<Output = bool> + Send;
}
