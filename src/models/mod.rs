pub mod todo;

pub use todo::{DeletedTodo, NewTodo, NewTodoRequest, Todo, TodoFilter, UpdateTodoRequest};
