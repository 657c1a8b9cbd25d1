use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

/// JSON body extractor whose rejections render as `{"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor with the same error shape.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Ids that are not integers can never match a row.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_todos(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<TodoFilter>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todos.list(filter).await?;
    Ok(Json(todos))
}

async fn create_todo(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state.todos.create(req).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.todos.get(parse_id(&id)?).await?;
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.todos.update(parse_id(&id)?, req).await?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedTodo>, AppError> {
    let deleted = state.todos.delete(parse_id(&id)?).await?;
    Ok(Json(deleted))
}
