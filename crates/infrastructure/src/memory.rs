use crate::repositories::TodoRepository;
use async_trait::async_trait;
use chrono::Utc;
use domain::{StorageError, Todo, TodoDraft, TodoId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    todos: BTreeMap<TodoId, Todo>,
}

/// プロセス内で完結するゲートウェイ実装（テスト用）
///
/// 採番・並び順・タイムスタンプは SQLite 実装と同じ規約に従う。
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, StorageError> {
        let store = self.store.read().await;
        let mut todos: Vec<Todo> = store.todos.values().cloned().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(todos)
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError> {
        Ok(self.store.read().await.todos.get(&id).cloned())
    }

    async fn insert(&self, draft: TodoDraft) -> Result<Todo, StorageError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let todo = Todo {
            id: TodoId::new(store.last_id),
            title: draft.title().to_string(),
            is_completed: draft.is_completed(),
            created_at: Utc::now(),
            updated_at: None,
        };
        store.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, draft: TodoDraft) -> Result<Option<Todo>, StorageError> {
        let mut store = self.store.write().await;
        let Some(todo) = store.todos.get_mut(&id) else {
            return Ok(None);
        };
        todo.title = draft.title().to_string();
        todo.is_completed = draft.is_completed();
        todo.updated_at = Some(Utc::now());
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StorageError> {
        Ok(self.store.write().await.todos.remove(&id).is_some())
    }

    async fn exists(&self, id: TodoId) -> Result<bool, StorageError> {
        Ok(self.store.read().await.todos.contains_key(&id))
    }
}
