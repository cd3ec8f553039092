#![allow(dead_code)]

use store_core::{
    models::ProductDto,
    ports::{ProductFailure, ProductRepository},
};
use store_sqlite::{Db, config::SqliteConfig};
use time::OffsetDateTime;

/// A fresh, migrated, in-memory database.
pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

/// A valid product payload.
pub fn product(name: &str, brand: &str, price: f64) -> ProductDto {
    ProductDto {
        id: None,
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        description: None,
        date_of_creation: None,
    }
}

/// Create a product, panicking on any failure.
pub async fn create(db: &Db, data: ProductDto, as_of: OffsetDateTime) -> ProductDto {
    db.create_product(data, as_of)
        .await
        .expect("database error")
        .expect("product failure")
}

/// Seed a small catalog, one second apart, returned in insertion order.
pub async fn seed(db: &Db) -> Vec<ProductDto> {
    let start = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let rows = [
        ("Trail runner", "Acme", 89.0),
        ("Road runner", "Acme", 120.0),
        ("Hiking boot", "Globex", 150.0),
        ("Sandal", "Initech", 25.0),
        ("Running sock", "Globex", 9.5),
    ];

    let mut created = Vec::new();
    for (i, (name, brand, price)) in rows.into_iter().enumerate() {
        let as_of = start + time::Duration::seconds(i as i64);
        created.push(create(db, product(name, brand, price), as_of).await);
    }
    created
}

pub fn names(products: &[ProductDto]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

pub fn is_invalid_sort<T>(result: &Result<T, ProductFailure>) -> bool {
    matches!(result, Err(ProductFailure::InvalidSort(_)))
}

pub fn is_invalid_filter<T>(result: &Result<T, ProductFailure>) -> bool {
    matches!(result, Err(ProductFailure::InvalidFilter(_)))
}
