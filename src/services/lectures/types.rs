use serde::{Deserialize, Serialize};

use super::ServiceError;

const TITLE_MAX_CHARS: usize = 200;

/// Lecture as returned to clients. Optional fields are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

/// Service input for `LectureService::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLecture {
    pub title: String,
    pub description: Option<String>,
    pub system_prompt: Option<String>,
}

/// Trim and check a title against the business rules.
pub fn normalize_title(title: &str) -> Result<String, ServiceError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::Validation("title is required".into()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ServiceError::Validation(format!(
            "title must be <= {TITLE_MAX_CHARS} chars"
        )));
    }
    Ok(title.to_string())
}
