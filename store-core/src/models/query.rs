/// Field products are sorted by when the caller does not say.
pub const DEFAULT_SORT_BY: &str = "price";

/// Sort direction used when the caller does not say.
pub const DEFAULT_SORT_TYPE: &str = "ASC";

/// Conjunctive filters for a product search.
///
/// Each filter narrows the result set; an absent filter matches everything.
/// How a filter is matched (exact, substring, ceiling) is decided by the
/// repository implementation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductFilter {
    /// Only products from one of these brands
    pub brands: Option<Vec<String>>,
    /// Only products matching this price
    pub price: Option<f64>,
    /// Only products whose name matches this text; empty means no filter
    pub product_name: String,
}

impl ProductFilter {
    /// Build a filter, normalizing "empty" inputs to "no filter".
    ///
    /// Blank brand names are dropped and an empty brand list becomes `None`.
    pub fn new(
        brands: impl IntoIterator<Item = String>,
        price: Option<f64>,
        product_name: impl Into<String>,
    ) -> Self {
        let brands = brands
            .into_iter()
            .map(|brand| brand.trim().to_owned())
            .filter(|brand| !brand.is_empty())
            .collect::<Vec<_>>();

        Self {
            brands: if brands.is_empty() { None } else { Some(brands) },
            price,
            product_name: product_name.into().trim().to_owned(),
        }
    }
}

/// An unvalidated sort request: a field name and a direction.
///
/// Legality of either part is the repository's call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Sort {
    /// Name of the field to sort by
    pub sort_by: String,
    /// `ASC` or `DESC`
    pub sort_type: String,
}

impl Sort {
    /// Construct a sort request.
    pub fn new(sort_by: impl Into<String>, sort_type: impl Into<String>) -> Self {
        Self {
            sort_by: sort_by.into(),
            sort_type: sort_type.into(),
        }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_BY, DEFAULT_SORT_TYPE)
    }
}
