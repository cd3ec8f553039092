/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Zero-based page index used when the caller does not ask for one.
pub const DEFAULT_PAGE: u32 = 0;

use thiserror::Error;

/// Returned when a page would hold no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size must be positive")]
pub struct InvalidPageSize;

/// Which slice of a result set to return.
///
/// The size is always positive; the only way to build one is [`Paging::new`]
/// or [`Paging::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    size: u32,
    page: u32,
}

impl Paging {
    /// Construct a paging request, refusing a zero `size`.
    pub fn new(size: u32, page: u32) -> Result<Self, InvalidPageSize> {
        if size == 0 {
            return Err(InvalidPageSize);
        }
        Ok(Self { size, page })
    }

    /// Number of items per page.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Zero-based page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of items that precede this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            page: DEFAULT_PAGE,
        }
    }
}

/// One page of results plus the metadata needed to fetch the others.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PageWrapper<T> {
    /// The items on this page, in sort order
    pub items: Vec<T>,
    /// Zero-based index of this page
    pub page: u32,
    /// Requested page size
    pub size: u32,
    /// Number of items matching the query across all pages
    pub total_elements: u64,
    /// Number of pages needed to hold `total_elements`
    pub total_pages: u64,
}

impl<T> PageWrapper<T> {
    /// Wrap `items` fetched with `paging` out of `total_elements` matches.
    pub fn new(items: Vec<T>, paging: Paging, total_elements: u64) -> Self {
        Self {
            items,
            page: paging.page(),
            size: paging.size(),
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(paging.size())),
        }
    }
}
