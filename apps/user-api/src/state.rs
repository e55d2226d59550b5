use std::sync::Arc;
use user_lib::user_service::UserServiceTrait;

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub env: String,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>, env: impl Into<String>) -> Self {
        Self {
            user_service,
            env: env.into(),
        }
    }
}
