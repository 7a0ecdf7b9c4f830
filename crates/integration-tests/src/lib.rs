//! Shared fixtures for the integration tests.

use tw_auth_simple::SimpleAuthProvider;
use tw_core::TopicDraft;
use tw_fixtures::{FixtureReportStore, FixtureUserDirectory};
use tw_forum::Forum;

/// A forum wired with the default plugins.
pub fn demo_forum() -> Forum {
    Forum::new(
        Box::new(SimpleAuthProvider::default()),
        Box::new(FixtureUserDirectory::default()),
        Box::new(FixtureReportStore::default()),
    )
}

pub fn draft(title: &str, category: &str) -> TopicDraft {
    TopicDraft::new(title, category, "text")
}
