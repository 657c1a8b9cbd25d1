pub mod todo_service;
pub mod validation;

pub use todo_service::TodoService;
