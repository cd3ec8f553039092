//! Row types used to map query results back into core models.

use store_core::models::{ProductDto, ProductId};
use time::OffsetDateTime;

/// The column list every product query selects, in `ProductRow` order.
pub(crate) const PRODUCT_COLUMNS: &str = "id, name, brand, price, description, date_of_creation";

#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub description: Option<String>,
    pub date_of_creation: OffsetDateTime,
}

impl From<ProductRow> for ProductDto {
    fn from(row: ProductRow) -> Self {
        ProductDto {
            id: Some(ProductId(row.id)),
            name: row.name,
            brand: row.brand,
            price: row.price,
            description: row.description,
            date_of_creation: Some(row.date_of_creation),
        }
    }
}
