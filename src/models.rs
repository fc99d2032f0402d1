use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub text: String,
}

impl Comment {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCommentsQuery {
    #[serde(default)]
    pub query: Option<String>,
}

impl ListCommentsQuery {
    pub fn matches(&self, comment: &Comment) -> bool {
        match self.query.as_deref() {
            Some(needle) => comment.text.contains(needle),
            None => true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub comments: usize,
}
