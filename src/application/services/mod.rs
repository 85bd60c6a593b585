//! Business logic services for the application layer.

pub mod pincode_service;
pub mod todo_service;

pub use pincode_service::PincodeService;
pub use todo_service::TodoService;
