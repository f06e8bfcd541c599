use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::course::{Course, CourseKey};

pub mod dynamodb;
#[cfg(test)]
pub mod memory;

/// A stored record exactly as the table holds it.
pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Operations on the course table. Each call maps to one storage request.
///
/// Reads hand back raw items so attributes outside `Course` survive, and so do
/// records that lack some of its fields.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Writes the full record, overwriting any record with the same key.
    async fn put_course(&self, course: &Course) -> Result<()>;

    async fn get_course(&self, key: &CourseKey) -> Result<Option<Item>>;

    /// Sets the mutable fields on the record at `course.key()`, creating it if
    /// absent, and returns every attribute of the record after the write.
    async fn update_course(&self, course: &Course) -> Result<Item>;

    /// Deleting an absent key is not an error.
    async fn delete_course(&self, key: &CourseKey) -> Result<()>;

    /// Full-table scan returning every record whose year equals `year`.
    async fn scan_by_year(&self, year: i64) -> Result<Vec<Item>>;
}
