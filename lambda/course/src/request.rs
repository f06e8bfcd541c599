use lambda_http::http::Method;
use lambda_http::{Request, RequestExt};
use serde_json::Value;

use crate::course::{Course, CourseKey};
use crate::error::{HandlerError, MISSING_YEAR};

/// The parts of an inbound event the dispatcher looks at.
#[derive(Debug, Clone)]
pub struct CourseRequest {
    pub method: Method,
    /// Present only when both `courseCode` and `teacherName` path params are non-empty.
    pub key: Option<CourseKey>,
    /// Raw `year` query parameter.
    pub year: Option<String>,
    body: Vec<u8>,
}

impl CourseRequest {
    pub fn from_event(event: &Request) -> Self {
        let path = event.path_parameters();
        let query = event.query_string_parameters();

        let key = match (
            non_empty(path.first("courseCode")),
            non_empty(path.first("teacherName")),
        ) {
            (Some(course_code), Some(teacher_name)) => {
                Some(CourseKey::new(course_code, teacher_name))
            }
            _ => None,
        };

        Self {
            method: event.method().clone(),
            key,
            year: non_empty(query.first("year")).map(str::to_string),
            body: event.body().as_ref().to_vec(),
        }
    }

    /// Decode the body into a course record.
    pub fn course(&self) -> Result<Course, HandlerError> {
        decode_course(&self.body)
    }

    /// Parse the `year` query parameter. Any numeric spelling of a whole
    /// number is accepted (`2024`, `2024.0`, `2.024e3`), matching how the
    /// table compares `N` values.
    pub fn year(&self) -> Result<i64, HandlerError> {
        let raw = self
            .year
            .as_deref()
            .ok_or(HandlerError::MissingParams(MISSING_YEAR))?
            .trim();
        if let Ok(year) = raw.parse::<i64>() {
            return Ok(year);
        }
        match raw.parse::<f64>() {
            Ok(year) if year.is_finite() && year.fract() == 0.0 && year.abs() < 1e15 => {
                Ok(year as i64)
            }
            _ => Err(HandlerError::InvalidParameter(
                "Year query parameter must be an integer".to_string(),
            )),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Decode a course from a body holding either a JSON object or a JSON string
/// that itself encodes the object.
pub fn decode_course(body: &[u8]) -> Result<Course, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(HandlerError::InvalidBody("body is empty".to_string()));
    }

    let value: Value = serde_json::from_slice(body).map_err(invalid_body)?;
    let value = match value {
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(invalid_body)?,
        other => other,
    };
    let course: Course = serde_json::from_value(value).map_err(invalid_body)?;

    if course.course_code.is_empty() {
        return Err(HandlerError::InvalidBody("courseCode must not be empty".to_string()));
    }
    if course.teacher_name.is_empty() {
        return Err(HandlerError::InvalidBody("teacherName must not be empty".to_string()));
    }
    // DynamoDB string sets cannot be empty.
    if course.students.is_empty() {
        return Err(HandlerError::InvalidBody(
            "students must contain at least one entry".to_string(),
        ));
    }

    Ok(course)
}

fn invalid_body(err: serde_json::Error) -> HandlerError {
    HandlerError::InvalidBody(err.to_string())
}
