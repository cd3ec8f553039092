use super::{Id, product_id, product_location, require_admin};
use crate::{
    ApiApplication,
    error::ApiError,
    response::{Created, NoContent},
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use axum_extra::{TypedHeader, typed_header::TypedHeaderRejection};
use headers::{Authorization, authorization::Bearer};
use store_core::{models::ProductDto, ports::ProductRepository as _};
use tracing::{Level, event};
use validator::Validate;

/// Binds and validates a product payload.
fn product_payload(payload: Result<Json<ProductDto>, JsonRejection>) -> Result<ProductDto, ApiError> {
    let Json(product) = payload.map_err(|rejection| ApiError::invalid(rejection.body_text()))?;
    product.validate()?;
    Ok(product)
}

/// Create a new product.
///
/// The store assigns the id and the creation time; any supplied values for
/// either are ignored.
///
/// # Authorization
///
/// Requires the admin role.
///
/// # Returns
///
/// - `201 Created`: The stored product, with `Location: /products/{id}`
/// - `400 Bad Request`: The payload is malformed or violates a constraint
/// - `401 Unauthorized`: Missing credentials
/// - `403 Forbidden`: Missing admin role
/// - `409 Conflict`: Another product already has this name
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn create_product<T: ApiApplication>(
    State(app): State<T>,
    auth: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<Created<ProductDto>, ApiError> {
    require_admin(&app, auth).await?;
    let product = product_payload(payload)?;

    let created = app
        .database()
        .create_product(product, app.now())
        .await
        .map_err(|err| ApiError::internal(err, "failed to create product"))??;

    let location = created
        .id
        .map(product_location)
        .ok_or_else(|| ApiError::internal("repository returned no id", "failed to create product"))?;

    event!(Level::DEBUG, location = %location, "created product");
    Ok(Created {
        location,
        body: created,
    })
}

/// Retrieve a single product.
///
/// # Returns
///
/// - `200 OK`: The product
/// - `400 Bad Request`: The id is not a positive integer
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: Database query failed
pub(crate) async fn read_product<T: ApiApplication>(
    State(app): State<T>,
    path: Result<Path<Id>, PathRejection>,
) -> Result<Json<ProductDto>, ApiError> {
    let product_id = product_id(path)?;

    let product = app
        .database()
        .get_product(product_id)
        .await
        .map_err(|err| ApiError::internal(err, format!("failed to get product {product_id}")))??;

    Ok(Json(product))
}

/// Replace a product's data.
///
/// The id in the path wins over any id in the payload.
///
/// # Authorization
///
/// Requires the admin role.
///
/// # Returns
///
/// - `200 OK`: The updated product
/// - `400 Bad Request`: Bad id, malformed payload or a violated constraint
/// - `401 Unauthorized`: Missing credentials
/// - `403 Forbidden`: Missing admin role
/// - `404 Not Found`: Product does not exist
/// - `409 Conflict`: Another product already has this name
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn update_product<T: ApiApplication>(
    State(app): State<T>,
    auth: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    path: Result<Path<Id>, PathRejection>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> Result<Json<ProductDto>, ApiError> {
    require_admin(&app, auth).await?;
    let product_id = product_id(path)?;
    let product = product_payload(payload)?.with_id(product_id);

    let updated = app
        .database()
        .update_product(product)
        .await
        .map_err(|err| ApiError::internal(err, format!("failed to update product {product_id}")))??;

    event!(Level::DEBUG, %product_id, "updated product");
    Ok(Json(updated))
}

/// Delete a product.
///
/// # Authorization
///
/// Requires the admin role.
///
/// # Returns
///
/// - `204 No Content`: The product is gone
/// - `400 Bad Request`: The id is not a positive integer
/// - `401 Unauthorized`: Missing credentials
/// - `403 Forbidden`: Missing admin role
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn delete_product<T: ApiApplication>(
    State(app): State<T>,
    auth: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    path: Result<Path<Id>, PathRejection>,
) -> Result<NoContent, ApiError> {
    require_admin(&app, auth).await?;
    let product_id = product_id(path)?;

    app.database()
        .delete_product(product_id)
        .await
        .map_err(|err| ApiError::internal(err, format!("failed to delete product {product_id}")))??;

    event!(Level::DEBUG, %product_id, "deleted product");
    Ok(NoContent)
}
