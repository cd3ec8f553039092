//! REST API endpoints for the product catalog.
//!
//! Reading is open to everyone. Creating, updating and deleting products
//! requires the admin role, which is checked before the request is even
//! bound, so an unauthorized caller never learns whether their payload would
//! have been valid.

use crate::{ApiApplication, error::ApiError};
use aide::{
    axum::{ApiRouter, routing::get},
    transform::TransformOperation,
};
use axum::extract::{Path, rejection::PathRejection};
use axum_extra::{TypedHeader, typed_header::TypedHeaderRejection};
use headers::{Authorization, authorization::Bearer};
use store_core::models::ProductId;
use validator::Validate;

mod crud;
mod list;

/// Where the product resource is mounted.
pub(crate) const BASE_PATH: &str = "/products";

/// Creates a router with product-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/",
            get(list::list_products::<T>).post_with(crud::create_product::<T>, admin_only),
            |route| route.tag("products"),
        )
        .api_route_with(
            "/{id}",
            get(crud::read_product::<T>)
                .put_with(crud::update_product::<T>, admin_only)
                .delete_with(crud::delete_product::<T>, admin_only),
            |route| route.tag("products"),
        )
}

fn admin_only(op: TransformOperation<'_>) -> TransformOperation<'_> {
    op.security_requirement("jwt").tag("admin")
}

/// Path parameter for product-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema, Validate)]
#[schemars(inline)]
pub(crate) struct Id {
    /// The unique identifier of the product
    #[validate(range(min = 1, message = "Id must be positive!"))]
    id: i64,
}

/// The `Location` of a stored product.
pub(crate) fn product_location(product_id: ProductId) -> String {
    format!("{BASE_PATH}/{product_id}")
}

/// Fails unless the caller holds the admin role.
///
/// Missing or malformed credentials are a 401, valid credentials without the
/// role a 403.
pub(crate) async fn require_admin<T: ApiApplication>(
    app: &T,
    auth: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
) -> Result<(), ApiError> {
    let TypedHeader(auth) = auth.map_err(|_| ApiError::Unauthorized)?;
    if app.can_manage_products(&auth).await {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

/// Binds and validates the product id in the path.
pub(crate) fn product_id(path: Result<Path<Id>, PathRejection>) -> Result<ProductId, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        ApiError::invalid_field("id", "type", rejection.body_text())
    })?;
    id.validate()?;
    Ok(ProductId(id.id))
}
