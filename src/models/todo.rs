use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub todo: String,
    pub status: String,
    pub priority: String,
    pub category: String,
    pub due_date: Option<String>,
}

/// Body of `POST /todos`. Required fields are optional here so that a missing
/// one surfaces as a validation error naming it instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodoRequest {
    pub id: Option<i64>,
    pub todo: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "dueDate", alias = "due_date")]
    pub due_date: Option<String>,
}

/// Fields of a create request after validation.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub id: Option<i64>,
    pub todo: String,
    pub status: String,
    pub priority: String,
    pub category: String,
    pub due_date: Option<String>,
}

/// Body of `PUT /todos/{id}`.
///
/// `due_date` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`), which is rejected like any other malformed date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub todo: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    #[serde(default, alias = "dueDate", deserialize_with = "explicit_null")]
    pub due_date: Option<Option<String>>,
}

impl UpdateTodoRequest {
    pub fn is_empty(&self) -> bool {
        self.todo.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
    }
}

/// Query string of `GET /todos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTodo {
    pub message: String,
    pub deleted_todo: Todo,
}

fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
