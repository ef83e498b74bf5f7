use crate::models::{map_sqlx_error, TodoRow};
use async_trait::async_trait;
use chrono::Utc;
use domain::{StorageError, Todo, TodoDraft, TodoId};
use sqlx::SqlitePool;
use tracing::debug;

/// ToDoコレクションに対するストレージゲートウェイ
///
/// 見つからない場合は `None` / `false` で表し、エラーはストレージ障害のみ。
/// 書き込み系の操作は一回の永続化のみを行い、リトライはしない。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 作成日時の降順（新しい順）
    async fn list_all(&self) -> Result<Vec<Todo>, StorageError>;

    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError>;

    /// 採番と `created_at` の設定はゲートウェイが行う
    async fn insert(&self, draft: TodoDraft) -> Result<Todo, StorageError>;

    /// タイトルと完了状態を上書きし `updated_at` を現在時刻にする
    async fn update(&self, id: TodoId, draft: TodoDraft) -> Result<Option<Todo>, StorageError>;

    async fn delete(&self, id: TodoId) -> Result<bool, StorageError>;

    async fn exists(&self, id: TodoId) -> Result<bool, StorageError>;
}

const SELECT_COLUMNS: &str = "id, title, is_completed, created_at, updated_at";

pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, StorageError> {
        let rows = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM todos ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM todos WHERE id = ?"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Todo::from))
    }

    async fn insert(&self, draft: TodoDraft) -> Result<Todo, StorageError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "INSERT INTO todos (title, is_completed, created_at) VALUES (?, ?, ?) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(draft.title())
        .bind(draft.is_completed())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(todo_id = row.id, "Inserted todo");
        Ok(row.into())
    }

    async fn update(&self, id: TodoId, draft: TodoDraft) -> Result<Option<Todo>, StorageError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "UPDATE todos SET title = ?, is_completed = ?, updated_at = ? WHERE id = ? \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(draft.title())
        .bind(draft.is_completed())
        .bind(Utc::now())
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Todo::from))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: TodoId) -> Result<bool, StorageError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}
