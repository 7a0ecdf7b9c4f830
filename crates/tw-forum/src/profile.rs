//! # Profile view-model
//!
//! Per-user numbers derived from what is in the stores right now.

use serde::Serialize;
use tw_core::{categories, Role, Session};

use crate::comments::CommentStore;
use crate::topics::TopicStore;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Topic,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: String,
    pub category: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub username: String,
    pub role: Role,
    pub is_admin: bool,
    pub topic_count: usize,
    pub comment_count: usize,
    pub recent: Vec<Activity>,
}

impl Profile {
    pub fn build(session: &Session, topics: &TopicStore, comments: &CommentStore) -> Self {
        let name = session.username.as_str();

        let mut dated = Vec::new();
        for topic in topics.all().iter().filter(|t| t.author == name) {
            dated.push((
                topic.created_at,
                Activity {
                    kind: ActivityKind::Topic,
                    title: topic.title.clone(),
                    category: categories::resolve(&topic.category).name.to_string(),
                    label: topic.last_activity.clone(),
                },
            ));
        }
        let topic_count = dated.len();

        let mut comment_count = 0;
        for comment in comments.all().iter().filter(|c| c.author == name) {
            comment_count += 1;
            // Replies to deleted topics still count but have nothing to link to.
            let Some(topic) = topics.get(comment.topic_id) else {
                continue;
            };
            dated.push((
                comment.created_at,
                Activity {
                    kind: ActivityKind::Comment,
                    title: format!("Reply to \"{}\"", topic.title),
                    category: categories::resolve(&topic.category).name.to_string(),
                    label: comment.timestamp.clone(),
                },
            ));
        }

        // stable: equal timestamps keep topics before comments
        dated.sort_by(|a, b| b.0.cmp(&a.0));

        Self {
            username: session.username.clone(),
            role: session.role,
            is_admin: session.is_admin(),
            topic_count,
            comment_count,
            recent: dated.into_iter().take(RECENT_LIMIT).map(|(_, a)| a).collect(),
        }
    }
}
