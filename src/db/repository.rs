use sqlx::SqlitePool;
use tracing::debug;

use crate::db::query::Clauses;
use crate::models::{NewTodo, Todo};

const TODO_COLUMNS: &str = "id, todo, status, priority, category, due_date";

pub async fn fetch_todos(db: &SqlitePool, filters: &Clauses) -> Result<Vec<Todo>, sqlx::Error> {
    let mut sql = format!("SELECT {TODO_COLUMNS} FROM todo WHERE 1=1");
    if !filters.is_empty() {
        sql.push_str(" AND ");
        sql.push_str(&filters.join(" AND "));
    }
    sql.push_str(" ORDER BY id ASC");

    debug!(query = %sql, params = filters.len(), "listing todos");

    let mut query = sqlx::query_as::<_, Todo>(&sql);
    for param in filters.params() {
        query = query.bind(param.clone());
    }
    query.fetch_all(db).await
}

pub async fn find_todo_by_id(db: &SqlitePool, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(&format!("SELECT {TODO_COLUMNS} FROM todo WHERE id = ?"))
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Inserts the row and returns its id, either the supplied one or the one
/// assigned by SQLite.
pub async fn insert_todo(db: &SqlitePool, todo: &NewTodo) -> Result<i64, sqlx::Error> {
    let result = match todo.id {
        Some(id) => {
            sqlx::query(
                "INSERT INTO todo (id, todo, status, priority, category, due_date) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(id)
            .bind(&todo.todo)
            .bind(&todo.status)
            .bind(&todo.priority)
            .bind(&todo.category)
            .bind(&todo.due_date)
            .execute(db)
            .await?
        }
        None => {
            sqlx::query(
                "INSERT INTO todo (todo, status, priority, category, due_date) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&todo.todo)
            .bind(&todo.status)
            .bind(&todo.priority)
            .bind(&todo.category)
            .bind(&todo.due_date)
            .execute(db)
            .await?
        }
    };

    Ok(todo.id.unwrap_or_else(|| result.last_insert_rowid()))
}

/// Applies `assignments` as the SET list of a single UPDATE. An empty set is a
/// no-op and touches nothing.
pub async fn update_todo(
    db: &SqlitePool,
    id: i64,
    assignments: &Clauses,
) -> Result<u64, sqlx::Error> {
    if assignments.is_empty() {
        return Ok(0);
    }

    let sql = format!("UPDATE todo SET {} WHERE id = ?", assignments.join(", "));
    let mut query = sqlx::query(&sql);
    for param in assignments.params() {
        query = query.bind(param.clone());
    }

    let result = query.bind(id).execute(db).await?;
    Ok(result.rows_affected())
}

pub async fn delete_todo(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todo WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
