use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{Comment, ListCommentsQuery},
};

/// Ordered comment storage addressed by numeric id.
///
/// Lookups scan in insertion order and act on the first match, so duplicate
/// ids resolve to the earliest record.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list(&self, query: ListCommentsQuery) -> Vec<Comment>;
    async fn get_by_id(&self, id: i64) -> Option<Comment>;
    /// Appends a comment under the next id above the current maximum.
    async fn create(&self, text: String) -> AppResult<Comment>;
    async fn update_text(&self, id: i64, text: String) -> Option<Comment>;
    async fn delete(&self, id: i64) -> Option<Comment>;
    async fn len(&self) -> usize;
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments: RwLock::new(comments),
        }
    }

    pub async fn snapshot(&self) -> Vec<Comment> {
        self.comments.read().await.clone()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list(&self, query: ListCommentsQuery) -> Vec<Comment> {
        self.comments
            .read()
            .await
            .iter()
            .filter(|comment| query.matches(comment))
            .cloned()
            .collect()
    }

    async fn get_by_id(&self, id: i64) -> Option<Comment> {
        let found = self
            .comments
            .read()
            .await
            .iter()
            .find(|comment| comment.id == id)
            .cloned();
        debug!(id, found = found.is_some(), "comment lookup");
        found
    }

    async fn create(&self, text: String) -> AppResult<Comment> {
        let mut comments = self.comments.write().await;
        let id = match comments.iter().map(|comment| comment.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(AppError::IdSpaceExhausted(max))?,
            None => 1,
        };

        let comment = Comment { id, text };
        comments.push(comment.clone());
        info!(id, total = comments.len(), "comment created");
        Ok(comment)
    }

    async fn update_text(&self, id: i64, text: String) -> Option<Comment> {
        let mut comments = self.comments.write().await;
        let comment = comments.iter_mut().find(|comment| comment.id == id)?;
        comment.text = text;
        info!(id, "comment updated");
        Some(comment.clone())
    }

    async fn delete(&self, id: i64) -> Option<Comment> {
        let mut comments = self.comments.write().await;
        let position = comments.iter().position(|comment| comment.id == id)?;
        let removed = comments.remove(position);
        info!(id, remaining = comments.len(), "comment deleted");
        Some(removed)
    }

    async fn len(&self) -> usize {
        self.comments.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentRepository, InMemoryCommentRepository};
    use crate::{
        error::AppError,
        models::{Comment, ListCommentsQuery},
    };

    fn repo() -> InMemoryCommentRepository {
        InMemoryCommentRepository::with_comments(vec![
            Comment::new(1, "hi"),
            Comment::new(2, "yo"),
        ])
    }

    #[tokio::test]
    async fn get_returns_seeded_records() {
        let repo = repo();

        assert_eq!(repo.get_by_id(2).await, Some(Comment::new(2, "yo")));
        assert_eq!(repo.get_by_id(3).await, None);
    }

    #[tokio::test]
    async fn update_rewrites_text_in_place() {
        let repo = repo();

        let updated = repo
            .update_text(1, "bye".to_string())
            .await
            .expect("comment 1 should exist");
        assert_eq!(updated, Comment::new(1, "bye"));

        assert_eq!(
            repo.snapshot().await,
            vec![Comment::new(1, "bye"), Comment::new(2, "yo")]
        );
    }

    #[tokio::test]
    async fn update_of_missing_id_leaves_collection_untouched() {
        let repo = repo();
        let before = repo.snapshot().await;

        assert!(repo.update_text(9, "nope".to_string()).await.is_none());
        assert_eq!(repo.snapshot().await, before);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let repo = repo();

        assert_eq!(repo.delete(3).await, None);
        assert_eq!(repo.len().await, 2);

        assert_eq!(repo.delete(2).await, Some(Comment::new(2, "yo")));
        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.get_by_id(2).await, None);
    }

    #[tokio::test]
    async fn duplicate_ids_resolve_to_first_match() {
        let repo = InMemoryCommentRepository::with_comments(vec![
            Comment::new(5, "first"),
            Comment::new(5, "second"),
        ]);

        assert_eq!(repo.get_by_id(5).await, Some(Comment::new(5, "first")));

        repo.update_text(5, "edited".to_string()).await;
        assert_eq!(
            repo.snapshot().await,
            vec![Comment::new(5, "edited"), Comment::new(5, "second")]
        );

        assert_eq!(repo.delete(5).await, Some(Comment::new(5, "edited")));
        assert_eq!(repo.snapshot().await, vec![Comment::new(5, "second")]);
    }

    #[tokio::test]
    async fn create_assigns_next_id_after_max() {
        let repo = repo();
        repo.delete(1).await;

        let created = repo.create("new".to_string()).await.expect("id available");
        assert_eq!(created, Comment::new(3, "new"));

        let empty = InMemoryCommentRepository::new();
        let first = empty.create("first".to_string()).await.expect("id available");
        assert_eq!(first.id, 1);
    }

    #[tokio::test]
    async fn create_refuses_to_reuse_the_largest_id() {
        let repo = InMemoryCommentRepository::with_comments(vec![Comment::new(i64::MAX, "a")]);

        let err = repo
            .create("b".to_string())
            .await
            .expect_err("no id above i64::MAX");
        assert!(matches!(err, AppError::IdSpaceExhausted(i64::MAX)));
        assert_eq!(repo.snapshot().await, vec![Comment::new(i64::MAX, "a")]);
    }

    #[tokio::test]
    async fn list_filters_by_substring() {
        let repo = repo();

        let all = repo.list(ListCommentsQuery::default()).await;
        assert_eq!(all.len(), 2);

        let filtered = repo
            .list(ListCommentsQuery {
                query: Some("y".to_string()),
            })
            .await;
        assert_eq!(filtered, vec![Comment::new(2, "yo")]);
    }
}
