//! # Forum
//!
//! The single state container. The rendering layer reads through
//! [`Forum::snapshot`] and [`Forum::screen`], and writes only through the
//! transition methods (or [`Forum::dispatch`]).

use serde::Serialize;
use tw_core::{
    categories, AuthProvider, Category, CategoryFilter, Comment, ForumError, ReportStore, Result, Session,
    Topic, TopicDraft, TopicId, UserDirectory,
};

use crate::comments::CommentStore;
use crate::intent::PendingIntent;
use crate::moderation::{compute_stats, AdminPanel, ModerationStats};
use crate::profile::Profile;
use crate::session::{LoginOutcome, Replayed, View, ViewState};
use crate::topics::TopicStore;
use crate::view::{CategoryCard, ForumScreen, Screen, TopicDetail};

/// Display knobs injected by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumSettings {
    /// Activity label stamped on fresh topics and comments
    pub just_now_label: String,
    /// How many registry entries form the featured group
    pub featured_categories: usize,
}

impl Default for ForumSettings {
    fn default() -> Self {
        Self {
            just_now_label: "just now".to_string(),
            featured_categories: 4,
        }
    }
}

/// Read-only copy of the whole state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForumSnapshot {
    pub session: Option<Session>,
    pub view: ViewState,
    pub auth_prompt_open: bool,
    pub pending: Option<PendingIntent>,
    pub topics: Vec<Topic>,
    pub comments: Vec<Comment>,
}

impl ForumSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct Forum {
    auth: Box<dyn AuthProvider>,
    users: Box<dyn UserDirectory>,
    reports: Box<dyn ReportStore>,
    settings: ForumSettings,

    session: Option<Session>,
    view: ViewState,
    topics: TopicStore,
    comments: CommentStore,
    pending: Option<PendingIntent>,
    auth_prompt_open: bool,
}

impl Forum {
    pub fn new(
        auth: Box<dyn AuthProvider>,
        users: Box<dyn UserDirectory>,
        reports: Box<dyn ReportStore>,
    ) -> Self {
        Self::with_settings(auth, users, reports, ForumSettings::default())
    }

    pub fn with_settings(
        auth: Box<dyn AuthProvider>,
        users: Box<dyn UserDirectory>,
        reports: Box<dyn ReportStore>,
        settings: ForumSettings,
    ) -> Self {
        Self {
            auth,
            users,
            reports,
            settings,
            session: None,
            view: ViewState::default(),
            topics: TopicStore::new(),
            comments: CommentStore::new(),
            pending: None,
            auth_prompt_open: false,
        }
    }

    // ── Session ────────────────────────────────────────────────────────────

    /// Opens a session for `username`. A blank name changes nothing.
    pub fn login(&mut self, username: &str) -> Result<LoginOutcome> {
        match self.auth.login(username) {
            Some(session) => Ok(self.establish(session)),
            None => {
                log::debug!("login skipped: blank username");
                Err(ForumError::Validation("username is empty".into()))
            }
        }
    }

    pub fn register(&mut self, username: &str, email: &str) -> Result<LoginOutcome> {
        match self.auth.register(username, email) {
            Some(session) => Ok(self.establish(session)),
            None => {
                log::debug!("registration skipped: username or email is empty");
                Err(ForumError::Validation("username and email are required".into()))
            }
        }
    }

    fn establish(&mut self, session: Session) -> LoginOutcome {
        log::info!("session opened for {} ({})", session.username, session.role.as_str());
        self.session = Some(session.clone());
        self.view.view = View::Forum;
        self.auth_prompt_open = false;

        let replayed = self.pending.take().map(|intent| {
            log::info!("replaying pending intent: {}", intent.describe());
            self.replay(intent)
        });
        LoginOutcome { session, replayed }
    }

    fn replay(&mut self, intent: PendingIntent) -> Replayed {
        match intent {
            PendingIntent::CreateTopic(draft) => Replayed::Topic(self.create_topic(draft)),
            PendingIntent::AddComment { topic_id, body } => {
                Replayed::Comment(self.comment_on(topic_id, &body))
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("session closed for {}", session.username);
        }
        self.view.view = View::Forum;
    }

    /// Shows the login prompt without queuing anything.
    pub fn request_login(&mut self) {
        self.auth_prompt_open = true;
    }

    /// Dismisses the login prompt and forgets any queued action.
    pub fn cancel_login(&mut self) -> Option<PendingIntent> {
        self.auth_prompt_open = false;
        let dropped = self.pending.take();
        if let Some(intent) = &dropped {
            log::info!("pending intent dropped: {}", intent.describe());
        }
        dropped
    }

    pub fn set_view(&mut self, target: View) -> Result<()> {
        if target == View::Admin && !self.is_admin() {
            log::debug!("admin view refused");
            return Err(ForumError::Forbidden("admin view requires the admin role".into()));
        }
        self.view.view = target;
        Ok(())
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.view.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.view.filter = CategoryFilter::All;
    }

    // ── Topics ─────────────────────────────────────────────────────────────

    pub fn create_topic(&mut self, draft: TopicDraft) -> Result<Topic> {
        if let Some(field) = draft.missing_field() {
            log::debug!("topic creation skipped: {} is empty", field);
            return Err(ForumError::Validation(format!("topic {} is empty", field)));
        }
        let Some(author) = self.session.as_ref().map(|s| s.username.clone()) else {
            self.defer(PendingIntent::CreateTopic(draft));
            return Err(ForumError::AuthRequired);
        };

        let topic = self.topics.create(draft, &author, &self.settings.just_now_label)?;
        log::info!("topic #{} created by {}", topic.id, topic.author);
        Ok(topic)
    }

    /// Removes a topic unconditionally. Absent ids are a no-op.
    pub fn delete_topic(&mut self, id: TopicId) -> Option<Topic> {
        let removed = self.topics.delete(id)?;
        if self.view.open_topic == Some(id) {
            self.view.open_topic = None;
        }
        log::info!("topic #{} deleted", id);
        Some(removed)
    }

    /// Acknowledged and logged; there is no approval state to change.
    pub fn approve_topic(&self, id: TopicId) {
        log::info!("approved topic: {}", id);
    }

    pub fn open_topic(&mut self, id: TopicId) -> Result<()> {
        if self.topics.get(id).is_none() {
            return Err(ForumError::NotFound("Topic", id));
        }
        self.view.open_topic = Some(id);
        Ok(())
    }

    pub fn close_topic(&mut self) {
        self.view.open_topic = None;
    }

    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&Topic> {
        self.topics.filter(filter)
    }

    /// Topics under the current filter.
    pub fn visible_topics(&self) -> Vec<&Topic> {
        self.topics.filter(&self.view.filter)
    }

    // ── Comments ───────────────────────────────────────────────────────────

    /// Replies to the currently open topic.
    pub fn add_comment(&mut self, body: &str) -> Result<Comment> {
        if body.trim().is_empty() {
            log::debug!("comment skipped: empty body");
            return Err(ForumError::Validation("comment body is empty".into()));
        }
        let Some(topic_id) = self.view.open_topic else {
            log::debug!("comment skipped: no topic is open");
            return Err(ForumError::Validation("no topic is open".into()));
        };
        if self.session.is_none() {
            self.defer(PendingIntent::AddComment { topic_id, body: body.to_string() });
            return Err(ForumError::AuthRequired);
        }
        self.comment_on(topic_id, body)
    }

    fn comment_on(&mut self, topic_id: TopicId, body: &str) -> Result<Comment> {
        let author = match &self.session {
            Some(session) => session.username.clone(),
            None => return Err(ForumError::AuthRequired),
        };
        if self.topics.get(topic_id).is_none() {
            return Err(ForumError::NotFound("Topic", topic_id));
        }

        let comment = self
            .comments
            .append(topic_id, body, &author, &self.settings.just_now_label)?;
        self.topics.record_reply(topic_id);
        log::info!("comment #{} added to topic #{} by {}", comment.id, topic_id, author);
        Ok(comment)
    }

    fn defer(&mut self, intent: PendingIntent) {
        log::info!("login required, holding: {}", intent.describe());
        self.pending = Some(intent);
        self.auth_prompt_open = true;
    }

    // ── Read paths ─────────────────────────────────────────────────────────

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn pending(&self) -> Option<&PendingIntent> {
        self.pending.as_ref()
    }

    pub fn auth_prompt_open(&self) -> bool {
        self.auth_prompt_open
    }

    pub fn topics(&self) -> &[Topic] {
        self.topics.all()
    }

    pub fn topic(&self, id: TopicId) -> Option<&Topic> {
        self.topics.get(id)
    }

    pub fn comments_for(&self, id: TopicId) -> Vec<&Comment> {
        self.comments.for_topic(id)
    }

    pub fn category_counts(&self) -> Vec<CategoryCard> {
        self.cards(&categories::CATEGORIES)
    }

    fn cards(&self, group: &'static [Category]) -> Vec<CategoryCard> {
        group
            .iter()
            .map(|category| CategoryCard {
                category,
                topic_count: self.topics.count_in(category.name),
            })
            .collect()
    }

    pub fn compute_stats(&self) -> ModerationStats {
        compute_stats(
            self.topics.all(),
            &self.users.list_users(),
            &self.reports.list_reports(),
        )
    }

    pub fn admin_panel(&self) -> AdminPanel {
        AdminPanel::new(
            self.topics.all().to_vec(),
            self.users.list_users(),
            self.reports.list_reports(),
        )
    }

    pub fn profile(&self) -> Option<Profile> {
        self.session
            .as_ref()
            .map(|s| Profile::build(s, &self.topics, &self.comments))
    }

    pub fn snapshot(&self) -> ForumSnapshot {
        ForumSnapshot {
            session: self.session.clone(),
            view: self.view.clone(),
            auth_prompt_open: self.auth_prompt_open,
            pending: self.pending.clone(),
            topics: self.topics.all().to_vec(),
            comments: self.comments.all().to_vec(),
        }
    }

    /// Picks the screen to render. The role is checked again here so a
    /// stale view selector never exposes the admin panel.
    pub fn screen(&self) -> Screen {
        match self.view.view {
            View::Admin if self.is_admin() => return Screen::Admin(self.admin_panel()),
            View::Profile => {
                if let Some(profile) = self.profile() {
                    return Screen::Profile(profile);
                }
            }
            _ => {}
        }
        Screen::Forum(self.forum_screen())
    }

    fn forum_screen(&self) -> ForumScreen {
        let split = self.settings.featured_categories;
        let featured = self.cards(categories::featured(split));
        let others = self.cards(categories::remaining(split));

        let open = self.view.open_topic.and_then(|id| self.topics.get(id)).map(|topic| TopicDetail {
            topic: topic.clone(),
            category: categories::resolve(&topic.category),
            comments: self.comments.for_topic(topic.id).into_iter().cloned().collect(),
        });

        ForumScreen {
            session: self.session.clone(),
            filter: self.view.filter.clone(),
            featured,
            others,
            topics: self.visible_topics().into_iter().cloned().collect(),
            open,
            auth_prompt_open: self.auth_prompt_open,
            pending: self.pending.clone(),
        }
    }
}
