use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{json, Map, Value};

use crate::course::{Course, CourseKey};
use crate::storage::Item;

pub const COURSE_CODE: &str = "courseCode";
pub const TEACHER_NAME: &str = "teacherName";
pub const COURSE_NAME: &str = "courseName";
pub const MONTH: &str = "month";
pub const YEAR: &str = "year";
pub const STUDENTS: &str = "students";

pub fn key_to_item(key: &CourseKey) -> Item {
    let mut item = Item::new();
    item.insert(
        COURSE_CODE.to_string(),
        AttributeValue::S(key.course_code.clone()),
    );
    item.insert(
        TEACHER_NAME.to_string(),
        AttributeValue::S(key.teacher_name.clone()),
    );
    item
}

/// Attributes written by an update, i.e. everything except the key.
pub fn mutable_attributes(course: &Course) -> Item {
    let mut item = Item::new();
    item.insert(
        COURSE_NAME.to_string(),
        AttributeValue::S(course.course_name.clone()),
    );
    item.insert(MONTH.to_string(), number(course.month));
    item.insert(YEAR.to_string(), number(course.year));
    item.insert(STUDENTS.to_string(), students(course));
    item
}

pub fn course_to_item(course: &Course) -> Item {
    let mut item = key_to_item(&course.key());
    item.extend(mutable_attributes(course));
    item
}

pub fn number(value: i64) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

pub fn students(course: &Course) -> AttributeValue {
    AttributeValue::Ss(course.students.iter().cloned().collect())
}

/// Whether the item's `year` attribute is numerically equal to `year`.
pub fn has_year(item: &Item, year: i64) -> bool {
    item.get(YEAR)
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse::<f64>().ok())
        .is_some_and(|n| n == year as f64)
}

/// Render an item in DynamoDB JSON (`{"S": ..}`, `{"N": ..}`, `{"SS": [..]}`).
pub fn item_to_json(item: &Item) -> Value {
    let map: Map<String, Value> = item
        .iter()
        .map(|(name, value)| (name.clone(), attribute_to_json(value)))
        .collect();
    Value::Object(map)
}

fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => json!({ "S": s }),
        AttributeValue::N(n) => json!({ "N": n }),
        AttributeValue::Ss(ss) => json!({ "SS": ss }),
        AttributeValue::Ns(ns) => json!({ "NS": ns }),
        AttributeValue::Bool(b) => json!({ "BOOL": b }),
        AttributeValue::Null(n) => json!({ "NULL": n }),
        AttributeValue::L(list) => {
            let values: Vec<Value> = list.iter().map(attribute_to_json).collect();
            json!({ "L": values })
        }
        AttributeValue::M(map) => json!({ "M": item_to_json(map) }),
        // Binary attributes are never written to the course table.
        _ => Value::Null,
    }
}
