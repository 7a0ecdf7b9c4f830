//! # Topic Store
//!
//! Ordered newest-first. Ids come from a counter owned by the store, so an
//! id is never handed out twice even after deletions.

use chrono::Utc;
use tw_core::{CategoryFilter, ForumError, Result, Topic, TopicDraft, TopicId};

#[derive(Debug, Clone)]
pub struct TopicStore {
    topics: Vec<Topic>,
    next_id: TopicId,
}

impl Default for TopicStore {
    fn default() -> Self {
        Self { topics: Vec::new(), next_id: 1 }
    }
}

impl TopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and prepends a fresh topic.
    pub fn create(&mut self, draft: TopicDraft, author: &str, label: &str) -> Result<Topic> {
        if let Some(field) = draft.missing_field() {
            return Err(ForumError::Validation(format!("topic {} is empty", field)));
        }

        let topic = Topic {
            id: self.next_id,
            title: draft.title,
            author: author.to_string(),
            category: draft.category,
            reply_count: 0,
            view_count: 0,
            last_activity: label.to_string(),
            body: draft.body,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.topics.insert(0, topic.clone());
        Ok(topic)
    }

    /// Removes the topic with the given id. Absent ids are a no-op.
    pub fn delete(&mut self, id: TopicId) -> Option<Topic> {
        let pos = self.topics.iter().position(|t| t.id == id)?;
        Some(self.topics.remove(pos))
    }

    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Topic> {
        self.topics.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn count_in(&self, category: &str) -> usize {
        self.topics.iter().filter(|t| t.category == category).count()
    }

    pub fn get(&self, id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Bumps the reply counter; false if the topic is gone.
    pub fn record_reply(&mut self, id: TopicId) -> bool {
        match self.topics.iter_mut().find(|t| t.id == id) {
            Some(topic) => {
                topic.reply_count += 1;
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[Topic] {
        &self.topics
    }
}
