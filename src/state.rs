use std::sync::Arc;

use crate::{config::NotFoundPolicy, repository::CommentRepository};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CommentRepository>,
    pub not_found_policy: NotFoundPolicy,
}

impl AppState {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self {
            repo,
            not_found_policy: NotFoundPolicy::default(),
        }
    }

    pub fn with_not_found_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found_policy = policy;
        self
    }
}
