//! # Pending intents
//!
//! A write attempted without a session is parked here until a login
//! succeeds (replay) or the login prompt is dismissed (drop).

use serde::{Deserialize, Serialize};
use tw_core::{TopicDraft, TopicId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingIntent {
    CreateTopic(TopicDraft),
    AddComment { topic_id: TopicId, body: String },
}

impl PendingIntent {
    pub fn describe(&self) -> String {
        match self {
            PendingIntent::CreateTopic(draft) => format!("create topic \"{}\"", draft.title),
            PendingIntent::AddComment { topic_id, .. } => format!("comment on topic #{}", topic_id),
        }
    }
}
