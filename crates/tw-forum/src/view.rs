//! # View composition
//!
//! Turns forum state into the one screen that should be on display.

use serde::Serialize;
use tw_core::{Category, CategoryFilter, Comment, Session, Topic};

use crate::intent::PendingIntent;
use crate::moderation::AdminPanel;
use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCard {
    pub category: &'static Category,
    pub topic_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDetail {
    pub topic: Topic,
    pub category: &'static Category,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForumScreen {
    pub session: Option<Session>,
    pub filter: CategoryFilter,
    pub featured: Vec<CategoryCard>,
    pub others: Vec<CategoryCard>,
    pub topics: Vec<Topic>,
    pub open: Option<TopicDetail>,
    pub auth_prompt_open: bool,
    pub pending: Option<PendingIntent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum Screen {
    Forum(ForumScreen),
    Profile(Profile),
    Admin(AdminPanel),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Forum(_) => "forum",
            Screen::Profile(_) => "profile",
            Screen::Admin(_) => "admin",
        }
    }
}
