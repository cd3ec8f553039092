mod paging;
mod product;
mod query;
mod role;

pub use paging::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, InvalidPageSize, PageWrapper, Paging};
pub use product::{ProductDto, ProductId};
pub use query::{DEFAULT_SORT_BY, DEFAULT_SORT_TYPE, ProductFilter, Sort};
pub use role::{Role, UnknownRole};

/// JSON schema for an optional RFC 3339 timestamp.
///
/// schemars has no built-in support for the `time` crate.
#[cfg(feature = "schemars")]
pub(crate) fn optional_datetime_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": ["string", "null"],
        "format": "date-time",
    })
}
