use chrono::{DateTime, Utc};
use domain::{StorageError, Todo, TodoId};
use sqlx::error::ErrorKind;

/// `todos` テーブルの行
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::new(row.id),
            title: row.title,
            is_completed: row.is_completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// sqlx のエラーをストレージエラーに分類
///
/// 制約違反以外（I/O、プールのタイムアウト、デコード失敗など）はすべて利用不可として扱う。
pub fn map_sqlx_error(error: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db_error) = &error {
        match db_error.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return StorageError::ConstraintViolation(db_error.message().to_string());
            }
            _ => {}
        }
    }
    StorageError::Unavailable(error.to_string())
}
