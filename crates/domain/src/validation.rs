use crate::errors::ValidationError;
use crate::todo::TodoDraft;
use serde::Deserialize;

pub const TITLE_MIN_LENGTH: usize = 1;
pub const TITLE_MAX_LENGTH: usize = 200;

const TITLE_REQUIRED: &str = "Title is required";
const TITLE_LENGTH: &str = "Title must be between 1 and 200 characters";
const TITLE_NUL: &str = "Title must not contain NUL characters";
const IS_COMPLETED_REQUIRED: &str = "isCompleted is required";

/// 受け付けた入力を検証し、検証済みの値へ変換する
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}

/// ToDo作成リクエスト
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

/// ToDo更新リクエスト（title と isCompleted の両方が必須）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl Validate for CreateTodoInput {
    type Output = TodoDraft;

    fn validate(self) -> Result<TodoDraft, ValidationError> {
        let mut errors = ValidationError::new();
        let title = check_title(self.title, &mut errors);

        errors.into_result(TodoDraft {
            title,
            is_completed: self.is_completed.unwrap_or(false),
        })
    }
}

impl Validate for UpdateTodoInput {
    type Output = TodoDraft;

    fn validate(self) -> Result<TodoDraft, ValidationError> {
        let mut errors = ValidationError::new();
        let title = check_title(self.title, &mut errors);
        if self.is_completed.is_none() {
            errors.add("isCompleted", IS_COMPLETED_REQUIRED);
        }

        errors.into_result(TodoDraft {
            title,
            is_completed: self.is_completed.unwrap_or(false),
        })
    }
}

// 空白のみのタイトルは未入力として扱う。長さは文字数で数える。
// SQLite の length() は NUL で打ち切られるため、NUL を含むタイトルは受け付けない。
fn check_title(title: Option<String>, errors: &mut ValidationError) -> String {
    let title = title.unwrap_or_default();
    if title.trim().is_empty() {
        errors.add("title", TITLE_REQUIRED);
        return title;
    }

    if title.contains('\0') {
        errors.add("title", TITLE_NUL);
        return title;
    }

    let length = title.chars().count();
    if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
        errors.add("title", TITLE_LENGTH);
    }
    title
}
