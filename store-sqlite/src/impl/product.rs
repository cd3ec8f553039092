use crate::Db;
use crate::types::{PRODUCT_COLUMNS, ProductRow};
use sqlx::{QueryBuilder, Sqlite};
use store_core::{
    models::{PageWrapper, Paging, ProductDto, ProductFilter, ProductId, Sort},
    ports::{ProductFailure, ProductRepository},
};
use time::OffsetDateTime;

impl ProductRepository for Db {
    async fn create_product(
        &self,
        data: ProductDto,
        as_of: OffsetDateTime,
    ) -> Result<Result<ProductDto, ProductFailure>, Self::Error> {
        let result = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            insert into
                product (name, name_key, brand, price, description, date_of_creation)
            values
                ($1, $2, $3, $4, $5, $6)
            returning
                {PRODUCT_COLUMNS}
            "#
        ))
        .bind(name_key(&data.name))
        .bind(data.name)
        .bind(data.brand)
        .bind(data.price)
        .bind(data.description)
        .bind(as_of)
        .fetch_one(&self.writer)
        .await;

        match result {
            Ok(row) => Ok(Ok(row.into())),
            Err(err) if is_unique_violation(&err) => Ok(Err(ProductFailure::NameConflict)),
            Err(err) => Err(err),
        }
    }

    async fn update_product(
        &self,
        data: ProductDto,
    ) -> Result<Result<ProductDto, ProductFailure>, Self::Error> {
        let Some(product_id) = data.id else {
            return Ok(Err(ProductFailure::DoesNotExist));
        };

        // date_of_creation is never rewritten
        let result = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            update
                product
            set
                name = $1,
                name_key = $2,
                brand = $3,
                price = $4,
                description = $5
            where
                id = $6
            returning
                {PRODUCT_COLUMNS}
            "#
        ))
        .bind(name_key(&data.name))
        .bind(data.name)
        .bind(data.brand)
        .bind(data.price)
        .bind(data.description)
        .bind(product_id.get())
        .fetch_optional(&self.writer)
        .await;

        match result {
            Ok(Some(row)) => Ok(Ok(row.into())),
            Ok(None) => Ok(Err(ProductFailure::DoesNotExist)),
            Err(err) if is_unique_violation(&err) => Ok(Err(ProductFailure::NameConflict)),
            Err(err) => Err(err),
        }
    }

    async fn delete_product(
        &self,
        product_id: ProductId,
    ) -> Result<Result<(), ProductFailure>, Self::Error> {
        let result = sqlx::query("delete from product where id = $1")
            .bind(product_id.get())
            .execute(&self.writer)
            .await?;

        if result.rows_affected() == 0 {
            Ok(Err(ProductFailure::DoesNotExist))
        } else {
            Ok(Ok(()))
        }
    }

    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Result<ProductDto, ProductFailure>, Self::Error> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "select {PRODUCT_COLUMNS} from product where id = $1"
        ))
        .bind(product_id.get())
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into).ok_or(ProductFailure::DoesNotExist))
    }

    async fn query_products(
        &self,
        paging: Paging,
        filter: ProductFilter,
        sort: Sort,
    ) -> Result<Result<PageWrapper<ProductDto>, ProductFailure>, Self::Error> {
        let (column, direction) = match order_by(&sort) {
            Ok(order) => order,
            Err(failure) => return Ok(Err(failure)),
        };
        if let Err(failure) = check_filter(&filter) {
            return Ok(Err(failure));
        }

        // Count and page are read in one transaction so the totals agree
        // with the items.
        let mut tx = self.reader.begin().await?;

        let mut count = QueryBuilder::<Sqlite>::new("select count(*) from product");
        push_filters(&mut count, &filter);
        let total: i64 = count.build_query_scalar().fetch_one(&mut *tx).await?;

        let mut page = QueryBuilder::<Sqlite>::new(format!("select {PRODUCT_COLUMNS} from product"));
        push_filters(&mut page, &filter);
        page.push(format!(" order by {column} {direction}, id asc"))
            .push(" limit ")
            .push_bind(i64::from(paging.size()))
            .push(" offset ")
            .push_bind(i64::try_from(paging.offset()).unwrap_or(i64::MAX));
        let rows = page
            .build_query_as::<ProductRow>()
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let items = rows.into_iter().map(Into::into).collect();
        Ok(Ok(PageWrapper::new(
            items,
            paging,
            u64::try_from(total).unwrap_or_default(),
        )))
    }
}

/// Appends the where clause for `filter`. Every value is bound, never spliced.
fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ProductFilter) {
    builder.push(" where 1 = 1");

    if let Some(brands) = &filter.brands {
        builder.push(" and brand in (");
        let mut separated = builder.separated(", ");
        for brand in brands {
            separated.push_bind(brand.clone());
        }
        separated.push_unseparated(")");
    }

    if let Some(price) = filter.price {
        builder.push(" and price <= ").push_bind(price);
    }

    if !filter.product_name.is_empty() {
        builder
            .push(" and instr(name_key, ")
            .push_bind(name_key(&filter.product_name))
            .push(") > 0");
    }
}

/// The case-folded form of a name that searches and name sorts compare.
/// SQLite's own `lower` only folds ASCII, so folding happens here.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Rejects filter values that cannot match any stored product.
fn check_filter(filter: &ProductFilter) -> Result<(), ProductFailure> {
    match filter.price {
        Some(price) if !price.is_finite() => Err(ProductFailure::InvalidFilter(format!(
            "price must be a finite number, got {price}"
        ))),
        Some(price) if price <= 0.0 => Err(ProductFailure::InvalidFilter(format!(
            "price must be positive, got {price}"
        ))),
        _ => Ok(()),
    }
}

/// Maps a requested sort onto a whitelisted column and direction.
fn order_by(sort: &Sort) -> Result<(&'static str, &'static str), ProductFailure> {
    let column = match sort.sort_by.trim() {
        "id" => "id",
        "name" | "productName" => "name_key",
        "brand" => "brand collate nocase",
        "price" => "price",
        "dateOfCreation" | "date_of_creation" => "date_of_creation",
        other => {
            return Err(ProductFailure::InvalidSort(format!(
                "unknown sort field {other:?}"
            )));
        }
    };

    let direction = match sort.sort_type.trim().to_ascii_uppercase().as_str() {
        "ASC" => "asc",
        "DESC" => "desc",
        _ => {
            return Err(ProductFailure::InvalidSort(format!(
                "unknown sort direction {:?}",
                sort.sort_type
            )));
        }
    };

    Ok((column, direction))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|err| err.is_unique_violation())
}
