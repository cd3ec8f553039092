use crate::models::{PageWrapper, Paging, ProductDto, ProductFilter, ProductId, Sort};
use std::future::Future;
use thiserror::Error;
use time::OffsetDateTime;

/// Expected, domain-level reasons a product operation did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFailure {
    /// No product has the requested id
    #[error("product does not exist")]
    DoesNotExist,
    /// Another product already uses this name
    #[error("a product with this name already exists")]
    NameConflict,
    /// The sort field or direction is not supported
    #[error("unsupported sort: {0}")]
    InvalidSort(String),
    /// A filter value is outside what the repository can match against
    #[error("unsupported filter: {0}")]
    InvalidFilter(String),
}

/// Repository interface for the product catalog.
///
/// This is the "product service" the HTTP layer delegates to. It owns
/// persistence, filtering, sorting and pagination; callers are expected to
/// have validated their inputs already.
///
/// Every method reports in two layers: the outer `Result` carries
/// infrastructure errors, the inner one a [`ProductFailure`].
pub trait ProductRepository: super::Repository {
    /// Store a new product, assigning its id and creation time.
    ///
    /// Any `id` or `date_of_creation` on `data` is ignored.
    fn create_product(
        &self,
        data: ProductDto,
        as_of: OffsetDateTime,
    ) -> impl Future<Output = Result<Result<ProductDto, ProductFailure>, Self::Error>> + Send;

    /// Replace the business fields of the product identified by `data.id`.
    ///
    /// The creation time is preserved. A missing `id` is reported as
    /// [`ProductFailure::DoesNotExist`].
    fn update_product(
        &self,
        data: ProductDto,
    ) -> impl Future<Output = Result<Result<ProductDto, ProductFailure>, Self::Error>> + Send;

    /// Remove a product.
    fn delete_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Result<(), ProductFailure>, Self::Error>> + Send;

    /// Fetch a single product.
    fn get_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Result<ProductDto, ProductFailure>, Self::Error>> + Send;

    /// Search the catalog.
    ///
    /// Filters are combined conjunctively. Results are ordered by `sort` and
    /// then by id, and sliced according to `paging`. What a filter value
    /// means, and which values are acceptable, is up to the implementation;
    /// an unacceptable one is reported as [`ProductFailure::InvalidFilter`].
    fn query_products(
        &self,
        paging: Paging,
        filter: ProductFilter,
        sort: Sort,
    ) -> impl Future<
        Output = Result<Result<PageWrapper<ProductDto>, ProductFailure>, Self::Error>,
    > + Send;
}
