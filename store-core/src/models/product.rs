use std::fmt::Display;
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

/// The store-assigned identifier of a product.
///
/// Identifiers are positive integers handed out by the repository when a
/// product is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductId(pub i64);

impl ProductId {
    /// The raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The external representation of a product.
///
/// `id` and `date_of_creation` are owned by the store: they are ignored when
/// a product is created and are filled in on every product the repository
/// returns. Every other field is validated on the way in.
#[derive(Debug, Clone, PartialEq, Validate)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductDto {
    /// Store-assigned identifier
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<ProductId>,

    /// Display name, unique across the catalog
    #[validate(
        custom(function = "not_blank", message = "Name must not be blank!"),
        length(max = 255, message = "Name must be at most 255 characters!")
    )]
    pub name: String,

    /// Manufacturer or label the product is sold under
    #[validate(
        custom(function = "not_blank", message = "Brand must not be blank!"),
        length(max = 100, message = "Brand must be at most 100 characters!")
    )]
    pub brand: String,

    /// Unit price
    #[validate(range(exclusive_min = 0.0, message = "Price must be positive!"))]
    pub price: f64,

    /// Free-form description
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters!"))]
    pub description: Option<String>,

    /// When the product was first stored
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    #[cfg_attr(
        feature = "schemars",
        schemars(schema_with = "crate::models::optional_datetime_schema")
    )]
    pub date_of_creation: Option<OffsetDateTime>,
}

impl ProductDto {
    /// Replace the identifier, discarding whatever the caller supplied.
    pub fn with_id(mut self, product_id: ProductId) -> Self {
        self.id = Some(product_id);
        self
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}
