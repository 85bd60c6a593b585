//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{PincodeService, TodoService};
use crate::domain::repositories::{PincodeClient, TodoRepository};

/// State cloned into every request.
///
/// Services sit behind trait objects so the server can run against the
/// in-memory store and real HTTP client while tests swap in stubs.
#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService<dyn TodoRepository>>,
    pub pincode_service: Arc<PincodeService<dyn PincodeClient>>,
}

impl AppState {
    pub fn new(
        todo_repository: Arc<dyn TodoRepository>,
        pincode_client: Arc<dyn PincodeClient>,
    ) -> Self {
        Self {
            todo_service: Arc::new(TodoService::new(todo_repository)),
            pincode_service: Arc::new(PincodeService::new(pincode_client)),
        }
    }
}
