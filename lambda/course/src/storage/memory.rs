use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::dynamodb::conversions::{
    course_to_item, has_year, key_to_item, mutable_attributes, COURSE_CODE, TEACHER_NAME,
};
use super::{CourseStore, Item, Result, StorageError};
use crate::course::{Course, CourseKey};

/// Holds raw items keyed by course key, the same shape DynamoDB returns, and
/// counts every call made against it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseStore {
    items: Arc<RwLock<HashMap<CourseKey, Item>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Seed an item as-is, bypassing `Course`. Does not count as a call.
    pub async fn insert_raw(&self, item: Item) {
        let key = CourseKey::new(
            string_attr(&item, COURSE_CODE),
            string_attr(&item, TEACHER_NAME),
        );
        self.items.write().await.insert(key, item);
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn string_attr(item: &Item, name: &str) -> String {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .unwrap_or_default()
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn put_course(&self, course: &Course) -> Result<()> {
        self.record_call();
        let mut items = self.items.write().await;
        items.insert(course.key(), course_to_item(course));
        Ok(())
    }

    async fn get_course(&self, key: &CourseKey) -> Result<Option<Item>> {
        self.record_call();
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn update_course(&self, course: &Course) -> Result<Item> {
        self.record_call();
        let key = course.key();
        let mut items = self.items.write().await;
        let item = items.entry(key).or_insert_with_key(key_to_item);
        item.extend(mutable_attributes(course));
        Ok(item.clone())
    }

    async fn delete_course(&self, key: &CourseKey) -> Result<()> {
        self.record_call();
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }

    async fn scan_by_year(&self, year: i64) -> Result<Vec<Item>> {
        self.record_call();
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| has_year(item, year))
            .cloned()
            .collect())
    }
}

/// Store whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingCourseStore;

impl FailingCourseStore {
    fn failure<T>() -> Result<T> {
        Err(StorageError::QueryFailed(
            "DynamoDB internal server error".to_string(),
        ))
    }
}

#[async_trait]
impl CourseStore for FailingCourseStore {
    async fn put_course(&self, _course: &Course) -> Result<()> {
        Self::failure()
    }

    async fn get_course(&self, _key: &CourseKey) -> Result<Option<Item>> {
        Self::failure()
    }

    async fn update_course(&self, _course: &Course) -> Result<Item> {
        Self::failure()
    }

    async fn delete_course(&self, _key: &CourseKey) -> Result<()> {
        Self::failure()
    }

    async fn scan_by_year(&self, _year: i64) -> Result<Vec<Item>> {
        Self::failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::fixtures::course;
    use crate::storage::dynamodb::conversions::{COURSE_NAME, YEAR};
    use aws_sdk_dynamodb::types::AttributeValue;

    #[tokio::test]
    async fn test_put_overwrites_existing_record() {
        let store = InMemoryCourseStore::new();
        let mut first = course("CS101", "Ada", 2024);
        store.put_course(&first).await.unwrap();

        first.course_name = "Renamed".to_string();
        store.put_course(&first).await.unwrap();

        let stored = store.get_course(&first.key()).await.unwrap().unwrap();
        assert_eq!(
            stored.get(COURSE_NAME),
            Some(&AttributeValue::S("Renamed".to_string()))
        );
        assert_eq!(store.calls(), 3);
    }

    #[tokio::test]
    async fn test_update_upserts_missing_record() {
        let store = InMemoryCourseStore::new();
        let record = course("CS200", "Grace", 2023);

        let updated = store.update_course(&record).await.unwrap();

        assert_eq!(updated, course_to_item(&record));
        assert!(store.get_course(&record.key()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_keeps_unrelated_attributes() {
        let store = InMemoryCourseStore::new();
        let record = course("CS200", "Grace", 2023);
        let mut item = key_to_item(&record.key());
        item.insert("room".to_string(), AttributeValue::S("B12".to_string()));
        store.insert_raw(item).await;

        let updated = store.update_course(&record).await.unwrap();

        assert_eq!(updated.get("room"), Some(&AttributeValue::S("B12".to_string())));
        assert_eq!(updated.get(YEAR), Some(&AttributeValue::N("2023".to_string())));
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let store = InMemoryCourseStore::new();
        let key = CourseKey::new("NOPE", "Nobody");
        assert!(store.delete_course(&key).await.is_ok());
    }

    #[tokio::test]
    async fn test_scan_by_year_filters_exactly() {
        let store = InMemoryCourseStore::new();
        store.put_course(&course("A", "T1", 2024)).await.unwrap();
        store.put_course(&course("B", "T2", 2023)).await.unwrap();
        store.put_course(&course("C", "T3", 2024)).await.unwrap();

        let mut codes: Vec<_> = store
            .scan_by_year(2024)
            .await
            .unwrap()
            .iter()
            .map(|item| string_attr(item, COURSE_CODE))
            .collect();
        codes.sort();

        assert_eq!(codes, vec!["A", "C"]);
        assert!(store.scan_by_year(1999).await.unwrap().is_empty());
    }
}
