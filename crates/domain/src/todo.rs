use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ストアが採番するToDoの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 永続化されたToDo
///
/// `id` と `created_at` は作成後に変わらない。`updated_at` は初回更新まで `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// 完了状態を反転したドラフトを作成（タイトルはそのまま）
    pub fn toggled(&self) -> TodoDraft {
        TodoDraft {
            title: self.title.clone(),
            is_completed: !self.is_completed,
        }
    }
}

/// 検証済みのタイトルと完了状態のみを持つ一時的なToDo
///
/// 作成・更新の両方でゲートウェイに渡される。id とタイムスタンプはゲートウェイ側で決まる。
/// バリデーションを通らない限り構築できない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub(crate) title: String,
    pub(crate) is_completed: bool,
}

impl TodoDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}

/// 外部向けのToDo表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Todo> for TodoView {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            is_completed: todo.is_completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}
