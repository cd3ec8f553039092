use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
};
use store_core::{
    models::{PageWrapper, Paging, ProductDto, ProductFilter, ProductId, Sort},
    ports::{ProductFailure, ProductRepository, Repository},
};
use time::OffsetDateTime;

/// The id every created product is given.
pub const CREATED_ID: ProductId = ProductId(42);

/// One call into the repository, with the arguments it received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(ProductDto),
    Update(ProductDto),
    Delete(ProductId),
    Get(ProductId),
    Query(Paging, ProductFilter, Sort),
}

/// A repository that succeeds with canned data and remembers every call, so
/// tests can assert what the handlers delegated (or that they did not).
#[derive(Clone, Default)]
pub struct RecordingRepository {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingRepository {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Repository for RecordingRepository {
    type Error = Infallible;
}

impl ProductRepository for RecordingRepository {
    async fn create_product(
        &self,
        data: ProductDto,
        as_of: OffsetDateTime,
    ) -> Result<Result<ProductDto, ProductFailure>, Self::Error> {
        self.record(Call::Create(data.clone()));
        Ok(Ok(ProductDto {
            date_of_creation: Some(as_of),
            ..data.with_id(CREATED_ID)
        }))
    }

    async fn update_product(
        &self,
        data: ProductDto,
    ) -> Result<Result<ProductDto, ProductFailure>, Self::Error> {
        self.record(Call::Update(data.clone()));
        Ok(Ok(data))
    }

    async fn delete_product(
        &self,
        product_id: ProductId,
    ) -> Result<Result<(), ProductFailure>, Self::Error> {
        self.record(Call::Delete(product_id));
        Ok(Ok(()))
    }

    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Result<ProductDto, ProductFailure>, Self::Error> {
        self.record(Call::Get(product_id));
        Ok(Ok(ProductDto {
            id: Some(product_id),
            name: "Trail runner".to_string(),
            brand: "Acme".to_string(),
            price: 89.0,
            description: None,
            date_of_creation: None,
        }))
    }

    async fn query_products(
        &self,
        paging: Paging,
        filter: ProductFilter,
        sort: Sort,
    ) -> Result<Result<PageWrapper<ProductDto>, ProductFailure>, Self::Error> {
        self.record(Call::Query(paging, filter, sort));
        Ok(Ok(PageWrapper::new(Vec::new(), paging, 0)))
    }
}
