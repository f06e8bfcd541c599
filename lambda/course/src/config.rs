use std::env;

pub const DEFAULT_TABLE_NAME: &str = "CourseTable";

/// Function configuration loaded from environment variables.
///
/// AWS region, credentials and endpoint come from the SDK's default chain.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the course table (`COURSE_TABLE`, default: "CourseTable")
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("COURSE_TABLE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
        }
    }
}
