/*
 * Responsibility
 * - Lectures の request DTO と、その形式チェック
 * - response は service の Lecture をそのまま返す (handler で組み立て直さない)
 */
use serde::Deserialize;

use crate::api::v1::extractors::Validate;
use crate::services::lectures::NewLecture;

const DESCRIPTION_MAX_CHARS: usize = 2_000;
const SYSTEM_PROMPT_MAX_CHARS: usize = 8_000;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLectureRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Validate for CreateLectureRequest {
    fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        if let Some(description) = &self.description
            && description.chars().count() > DESCRIPTION_MAX_CHARS
        {
            return Err("description must be <= 2000 chars");
        }
        if let Some(prompt) = &self.system_prompt
            && prompt.chars().count() > SYSTEM_PROMPT_MAX_CHARS
        {
            return Err("system_prompt must be <= 8000 chars");
        }

        Ok(())
    }
}

impl From<CreateLectureRequest> for NewLecture {
    fn from(req: CreateLectureRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            system_prompt: req.system_prompt,
        }
    }
}
