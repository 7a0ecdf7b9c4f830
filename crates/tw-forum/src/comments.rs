//! # Comment Store
//!
//! Append-only. Every comment remembers the topic it was posted to.

use chrono::Utc;
use tw_core::{Comment, CommentId, ForumError, Result, TopicId};

#[derive(Debug, Clone)]
pub struct CommentStore {
    comments: Vec<Comment>,
    next_id: CommentId,
}

impl Default for CommentStore {
    fn default() -> Self {
        Self { comments: Vec::new(), next_id: 1 }
    }
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a comment. Whitespace-only bodies are rejected.
    pub fn append(
        &mut self,
        topic_id: TopicId,
        body: &str,
        author: &str,
        label: &str,
    ) -> Result<Comment> {
        if body.trim().is_empty() {
            return Err(ForumError::Validation("comment body is empty".into()));
        }

        let comment = Comment {
            id: self.next_id,
            topic_id,
            author: author.to_string(),
            body: body.to_string(),
            timestamp: label.to_string(),
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.comments.push(comment.clone());
        Ok(comment)
    }

    pub fn for_topic(&self, topic_id: TopicId) -> Vec<&Comment> {
        self.comments.iter().filter(|c| c.topic_id == topic_id).collect()
    }

    pub fn all(&self) -> &[Comment] {
        &self.comments
    }
}
