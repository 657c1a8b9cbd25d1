use sqlx::SqlitePool;
use tracing::{error, info};

use crate::db::query::Clauses;
use crate::db::repository;
use crate::error::AppError;
use crate::models::{DeletedTodo, NewTodo, NewTodoRequest, Todo, TodoFilter, UpdateTodoRequest};
use crate::services::validation::{missing_required_fields, normalize_due_date};

/// Validates requests against the `todo` table and shapes the results.
///
/// Each operation is a short sequence of independent statements with no
/// enclosing transaction, so an update or delete can race a concurrent delete
/// between its existence check and its mutation.
#[derive(Clone)]
pub struct TodoService {
    db: SqlitePool,
}

impl TodoService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Lists rows matching every supplied filter, ordered by id.
    pub async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        let due_date = filter
            .due_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(normalize_due_date)
            .transpose()?;

        let mut filters = Clauses::new();
        filters.push_present("due_date = ?", due_date.as_deref());
        filters.push_present("status = ?", filter.status.as_deref());
        filters.push_present("priority = ?", filter.priority.as_deref());
        filters.push_present("category = ?", filter.category.as_deref());

        Ok(repository::fetch_todos(&self.db, &filters).await?)
    }

    pub async fn create(&self, req: NewTodoRequest) -> Result<Todo, AppError> {
        let missing = missing_required_fields(&req);
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let due_date = req
            .due_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(normalize_due_date)
            .transpose()?;

        let new_todo = NewTodo {
            // 0 means "let the store assign", like an omitted id
            id: req.id.filter(|id| *id != 0),
            todo: req.todo.unwrap_or_default(),
            status: req.status.unwrap_or_default(),
            priority: req.priority.unwrap_or_default(),
            category: req.category.unwrap_or_default(),
            due_date,
        };

        let id = repository::insert_todo(&self.db, &new_todo)
            .await
            .map_err(|e| {
                let duplicate = e
                    .as_database_error()
                    .is_some_and(|db_err| db_err.is_unique_violation());
                if duplicate {
                    AppError::Conflict("ID already exists".to_string())
                } else {
                    AppError::Database(e)
                }
            })?;
        info!("created todo {}", id);

        repository::find_todo_by_id(&self.db, id)
            .await?
            .ok_or_else(|| {
                error!("todo {} missing right after insert", id);
                AppError::Internal
            })
    }

    pub async fn get(&self, id: i64) -> Result<Todo, AppError> {
        repository::find_todo_by_id(&self.db, id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Applies only the fields present in `req`. Validation finishes before
    /// the single UPDATE runs, so a bad date leaves the row untouched.
    pub async fn update(&self, id: i64, req: UpdateTodoRequest) -> Result<Todo, AppError> {
        if repository::find_todo_by_id(&self.db, id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        let mut assignments = Clauses::new();
        if let Some(todo) = req.todo {
            assignments.push("todo = ?", Some(todo));
        }
        if let Some(status) = req.status {
            assignments.push("status = ?", Some(status));
        }
        if let Some(priority) = req.priority {
            assignments.push("priority = ?", Some(priority));
        }
        if let Some(category) = req.category {
            assignments.push("category = ?", Some(category));
        }
        match req.due_date {
            Some(Some(date)) => assignments.push("due_date = ?", Some(normalize_due_date(&date)?)),
            Some(None) => return Err(AppError::invalid_date()),
            None => {}
        }

        if !assignments.is_empty() {
            repository::update_todo(&self.db, id, &assignments).await?;
            info!("updated todo {} ({} fields)", id, assignments.len());
        }

        self.get(id).await
    }

    /// Deletes the row and hands back what it held.
    pub async fn delete(&self, id: i64) -> Result<DeletedTodo, AppError> {
        let existing = self.get(id).await?;

        if !repository::delete_todo(&self.db, id).await? {
            return Err(AppError::NotFound);
        }
        info!("deleted todo {}", id);

        Ok(DeletedTodo {
            message: "Todo deleted successfully".to_string(),
            deleted_todo: existing,
        })
    }
}
