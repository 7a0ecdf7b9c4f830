//! # Session and navigation state
//!
//! The active identity lives on [`crate::Forum`]; this module holds the
//! navigation selector and the types a login hands back.

use serde::{Deserialize, Serialize};
use tw_core::{CategoryFilter, Comment, Result, Session, Topic, TopicId};

/// Top-level screen selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Forum,
    Profile,
    Admin,
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forum" => Ok(View::Forum),
            "profile" => Ok(View::Profile),
            "admin" => Ok(View::Admin),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

/// Everything the user has navigated to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub view: View,
    pub filter: CategoryFilter,
    pub open_topic: Option<TopicId>,
}

/// The result of replaying a queued action after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replayed {
    Topic(Result<Topic>),
    Comment(Result<Comment>),
}

/// What a successful login or registration produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    pub replayed: Option<Replayed>,
}
