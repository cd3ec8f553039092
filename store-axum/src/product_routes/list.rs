use crate::{ApiApplication, config::AxumConfig, error::ApiError};
use axum::{Extension, Json, extract::State};
use axum_extra::extract::{Query, QueryRejection};
use std::sync::Arc;
use store_core::{
    models::{
        DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, DEFAULT_SORT_TYPE, PageWrapper, Paging,
        ProductDto, ProductFilter, Sort,
    },
    ports::ProductRepository as _,
};
use tracing::{Level, event};
use validator::Validate;

/// Query parameters for searching the catalog.
///
/// Numbers are taken as signed so that a negative value is reported as a
/// constraint violation rather than a parse error.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductSearchParams {
    /// Number of products per page
    #[serde(default = "default_size")]
    #[validate(range(min = 1, message = "Size must be positive!"))]
    size: i64,

    /// Zero-based page index
    #[serde(default = "default_page")]
    #[validate(range(min = 0, message = "Page must not be negative!"))]
    page: i64,

    /// Brands to include; repeat the key or separate names with commas
    #[serde(default)]
    brands: Vec<String>,

    /// Upper bound on the price
    price: Option<f64>,

    /// Case-insensitive fragment of the product name
    #[serde(default)]
    product_name: String,

    /// Field to sort by
    #[serde(default = "default_sort_by")]
    sort_by: String,

    /// `ASC` or `DESC`
    #[serde(default = "default_sort_type")]
    sort_type: String,
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE.into()
}

fn default_page() -> i64 {
    DEFAULT_PAGE.into()
}

fn default_sort_by() -> String {
    DEFAULT_SORT_BY.to_owned()
}

fn default_sort_type() -> String {
    DEFAULT_SORT_TYPE.to_owned()
}

impl ProductSearchParams {
    /// Checks that need the server configuration or that the derive cannot
    /// express.
    fn check(&self, config: &AxumConfig) -> Result<(), ApiError> {
        self.validate()?;
        if self.size > i64::from(config.max_page_size) {
            return Err(ApiError::invalid_field(
                "size",
                "range",
                format!("Size must be at most {}!", config.max_page_size),
            ));
        }
        Ok(())
    }

    fn into_parts(self) -> Result<(Paging, ProductFilter, Sort), ApiError> {
        let size = u32::try_from(self.size)
            .map_err(|_| ApiError::invalid_field("size", "range", "Size is too large!"))?;
        let page = u32::try_from(self.page)
            .map_err(|_| ApiError::invalid_field("page", "range", "Page is too large!"))?;

        let brands = self
            .brands
            .iter()
            .flat_map(|brands| brands.split(','))
            .map(str::to_owned)
            .collect::<Vec<_>>();

        Ok((
            Paging::new(size, page)
                .map_err(|err| ApiError::invalid_field("size", "range", err.to_string()))?,
            ProductFilter::new(brands, self.price, self.product_name),
            Sort::new(self.sort_by, self.sort_type),
        ))
    }
}

/// Search the product catalog.
///
/// All filters are optional and combine conjunctively. Results are ordered
/// by `sortBy` and then by id.
///
/// # Returns
///
/// - `200 OK`: One page of matching products
/// - `400 Bad Request`: A parameter is malformed or out of range, or the
///   sort or a filter value is unsupported by the catalog
/// - `500 Internal Server Error`: Database query failed
pub(crate) async fn list_products<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    query: Result<Query<ProductSearchParams>, QueryRejection>,
) -> Result<Json<PageWrapper<ProductDto>>, ApiError> {
    let Query(params) = query.map_err(|rejection| ApiError::invalid(rejection.body_text()))?;
    params.check(&config)?;
    let (paging, filter, sort) = params.into_parts()?;

    event!(Level::DEBUG, ?paging, ?filter, ?sort, "searching products");
    let page = app
        .database()
        .query_products(paging, filter, sort)
        .await
        .map_err(|err| ApiError::internal(err, "failed to search products"))??;

    Ok(Json(page))
}
