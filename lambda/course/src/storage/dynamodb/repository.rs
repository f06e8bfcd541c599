use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use super::conversions::{
    course_to_item, key_to_item, number, students, COURSE_NAME, MONTH, STUDENTS, YEAR,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use crate::course::{Course, CourseKey};
use crate::storage::{CourseStore, Item, Result, StorageError};

/// Holds the SDK client built once at cold start and shared by every invocation.
pub struct DynamoDbCourseStore {
    client: Client,
    table_name: String,
}

impl DynamoDbCourseStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl CourseStore for DynamoDbCourseStore {
    async fn put_course(&self, course: &Course) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(course_to_item(course)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_course(&self, key: &CourseKey) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        Ok(result.item)
    }

    async fn update_course(&self, course: &Course) -> Result<Item> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(&course.key())))
            .update_expression(
                "SET #cn = :courseName, #mn = :month, #yr = :year, #st = :students",
            )
            .expression_attribute_names("#cn", COURSE_NAME)
            .expression_attribute_names("#mn", MONTH)
            .expression_attribute_names("#yr", YEAR)
            .expression_attribute_names("#st", STUDENTS)
            .expression_attribute_values(
                ":courseName",
                AttributeValue::S(course.course_name.clone()),
            )
            .expression_attribute_values(":month", number(course.month))
            .expression_attribute_values(":year", number(course.year))
            .expression_attribute_values(":students", students(course))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        result.attributes.ok_or_else(|| {
            StorageError::InvalidData("UpdateItem returned no attributes".to_string())
        })
    }

    async fn delete_course(&self, key: &CourseKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_by_year(&self, year: i64) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key = None;

        // A single Scan page stops at 1 MB; keep going until the table is exhausted.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("#yr = :year")
                .expression_attribute_names("#yr", YEAR)
                .expression_attribute_values(":year", number(year))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            items.extend(result.items.unwrap_or_default());

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }
}
