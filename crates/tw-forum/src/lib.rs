//! tw-forum
//!
//! The TimeWorld state container: session, navigation, topic and comment
//! stores, and the read models (profile, admin panel, screen) built on top.
//! All transitions are synchronous and run to completion.

pub mod action;
pub mod comments;
pub mod forum;
pub mod intent;
pub mod moderation;
pub mod profile;
pub mod session;
pub mod topics;
pub mod view;

pub use action::{Action, Effect};
pub use forum::{Forum, ForumSettings, ForumSnapshot};
pub use intent::PendingIntent;
pub use moderation::{compute_stats, AdminPanel, ModerationStats};
pub use profile::{Activity, ActivityKind, Profile};
pub use session::{LoginOutcome, Replayed, View, ViewState};
pub use view::{CategoryCard, ForumScreen, Screen, TopicDetail};
