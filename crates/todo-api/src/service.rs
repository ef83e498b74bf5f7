use domain::{StorageError, TodoDraft, TodoId, TodoView};
use infrastructure::TodoRepository;
use std::sync::Arc;

/// ToDoの作成・更新規則を適用し、永続化表現と外部表現を変換するサービス
///
/// 入力は検証済みの `TodoDraft` のみを受け取る。見つからない場合は `None`、
/// ストレージ障害はそのまま呼び出し元へ返す。
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<TodoView>, StorageError> {
        let todos = self.repository.list_all().await?;
        Ok(todos.into_iter().map(TodoView::from).collect())
    }

    pub async fn get_by_id(&self, id: TodoId) -> Result<Option<TodoView>, StorageError> {
        Ok(self.repository.get_by_id(id).await?.map(TodoView::from))
    }

    pub async fn create(&self, draft: TodoDraft) -> Result<TodoView, StorageError> {
        let todo = self.repository.insert(draft).await?;
        Ok(todo.into())
    }

    pub async fn update(
        &self,
        id: TodoId,
        draft: TodoDraft,
    ) -> Result<Option<TodoView>, StorageError> {
        Ok(self.repository.update(id, draft).await?.map(TodoView::from))
    }

    /// 完了状態を反転する。タイトルは保持され、更新と同じ経路で保存される。
    pub async fn toggle(&self, id: TodoId) -> Result<Option<TodoView>, StorageError> {
        let Some(current) = self.repository.get_by_id(id).await? else {
            return Ok(None);
        };
        self.update(id, current.toggled()).await
    }

    pub async fn delete(&self, id: TodoId) -> Result<bool, StorageError> {
        self.repository.delete(id).await
    }
}
