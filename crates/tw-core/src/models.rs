//! # Domain Models
//!
//! These structs represent the core entities of TimeWorld.
//! Identifiers are plain integers handed out by the owning store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TopicId = u64;
pub type CommentId = u64;

/// Privilege level attached to a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// The identity of the current actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self { username: username.into(), role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A forum thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub author: String,
    /// Name of a registry category; unknown names render with the default style
    pub category: String,
    pub reply_count: u32,
    pub view_count: u32,
    pub last_activity: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A reply attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub topic_id: TopicId,
    pub author: String,
    pub body: String,
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
}

/// Form contents of the "create topic" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDraft {
    pub title: String,
    pub category: String,
    pub body: String,
}

impl TopicDraft {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            body: body.into(),
        }
    }

    /// Returns the name of the first empty field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.category.is_empty() {
            Some("category")
        } else if self.body.is_empty() {
            Some("body")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Banned,
}

/// A member as listed in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub role: Role,
    pub topic_count: u32,
    pub comment_count: u32,
    pub status: UserStatus,
}

impl UserRecord {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Topic,
    User,
    Comment,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Topic => "topic",
            ReportKind::User => "user",
            ReportKind::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Resolved,
}

/// A complaint filed against a topic, user or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub kind: ReportKind,
    /// Free-form description of what was reported
    pub target: String,
    pub reporter: String,
    pub reason: String,
    pub status: ReportStatus,
}

impl Report {
    pub fn is_pending(&self) -> bool {
        self.status == ReportStatus::Pending
    }
}
