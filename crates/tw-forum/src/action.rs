//! # Actions
//!
//! Every write path as a value, so a host can drive the forum from a queue
//! of user gestures.

use tw_core::{CategoryFilter, Comment, Result, Topic, TopicDraft, TopicId};

use crate::forum::Forum;
use crate::intent::PendingIntent;
use crate::session::{LoginOutcome, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login { username: String },
    Register { username: String, email: String },
    Logout,
    RequestLogin,
    CancelLogin,
    SetView(View),
    SetFilter(CategoryFilter),
    CreateTopic(TopicDraft),
    DeleteTopic(TopicId),
    ApproveTopic(TopicId),
    OpenTopic(TopicId),
    CloseTopic,
    AddComment { body: String },
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoggedIn(LoginOutcome),
    LoggedOut,
    PromptShown,
    PromptClosed { dropped: Option<PendingIntent> },
    ViewChanged(View),
    FilterChanged(CategoryFilter),
    TopicCreated(Topic),
    TopicDeleted(Option<Topic>),
    TopicApproved(TopicId),
    TopicOpened(TopicId),
    TopicClosed,
    CommentAdded(Comment),
}

impl Forum {
    pub fn dispatch(&mut self, action: Action) -> Result<Effect> {
        log::debug!("dispatch {:?}", action);
        match action {
            Action::Login { username } => self.login(&username).map(Effect::LoggedIn),
            Action::Register { username, email } => {
                self.register(&username, &email).map(Effect::LoggedIn)
            }
            Action::Logout => {
                self.logout();
                Ok(Effect::LoggedOut)
            }
            Action::RequestLogin => {
                self.request_login();
                Ok(Effect::PromptShown)
            }
            Action::CancelLogin => Ok(Effect::PromptClosed { dropped: self.cancel_login() }),
            Action::SetView(view) => self.set_view(view).map(|_| Effect::ViewChanged(view)),
            Action::SetFilter(filter) => {
                self.set_filter(filter.clone());
                Ok(Effect::FilterChanged(filter))
            }
            Action::CreateTopic(draft) => self.create_topic(draft).map(Effect::TopicCreated),
            Action::DeleteTopic(id) => Ok(Effect::TopicDeleted(self.delete_topic(id))),
            Action::ApproveTopic(id) => {
                self.approve_topic(id);
                Ok(Effect::TopicApproved(id))
            }
            Action::OpenTopic(id) => self.open_topic(id).map(|_| Effect::TopicOpened(id)),
            Action::CloseTopic => {
                self.close_topic();
                Ok(Effect::TopicClosed)
            }
            Action::AddComment { body } => self.add_comment(&body).map(Effect::CommentAdded),
        }
    }
}
