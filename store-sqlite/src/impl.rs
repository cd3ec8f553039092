//! Repository trait implementations for the SQLite database.

use crate::Db;
use store_core::ports::Repository;

mod product;

impl Repository for Db {
    type Error = sqlx::Error;
}
