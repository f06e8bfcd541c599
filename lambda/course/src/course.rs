use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Key pair that uniquely identifies a course enrollment record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseKey {
    pub course_code: String,
    pub teacher_name: String,
}

impl CourseKey {
    pub fn new(course_code: impl Into<String>, teacher_name: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            teacher_name: teacher_name.into(),
        }
    }
}

impl std::fmt::Display for CourseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.course_code, self.teacher_name)
    }
}

/// A course enrollment record as stored in the course table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_code: String,
    pub teacher_name: String,
    pub course_name: String,
    pub month: i64,
    pub year: i64,
    pub students: BTreeSet<String>,
}

impl Course {
    pub fn key(&self) -> CourseKey {
        CourseKey::new(&self.course_code, &self.teacher_name)
    }
}
