use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

use crate::models::Comment;

/// Comments available on a fresh start when no seed file is configured.
pub fn default_comments() -> Vec<Comment> {
    vec![
        Comment::new(1, "This is the first comment"),
        Comment::new(2, "This is the second comment"),
        Comment::new(3, "This is the third comment"),
    ]
}

/// Reads a JSON array of `{ "id": .., "text": .. }` objects.
pub fn load_comments(path: &Path) -> Result<Vec<Comment>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let comments: Vec<Comment> = serde_json::from_str(&raw)
        .with_context(|| format!("seed file {} is not a JSON comment array", path.display()))?;

    info!(path = %path.display(), count = comments.len(), "loaded comment seed");
    Ok(comments)
}

pub fn initial_comments(seed_file: Option<&Path>) -> Result<Vec<Comment>> {
    match seed_file {
        Some(path) => load_comments(path),
        None => Ok(default_comments()),
    }
}
