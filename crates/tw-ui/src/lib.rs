//! # tw-ui
//!
//! Plain-text screens rendered through askama templates.

use askama::Template;
use tw_core::{categories, Report, Topic, UserRecord, UserStatus};
use tw_forum::{AdminPanel, CategoryCard, ForumScreen, Profile, Screen, TopicDetail};

pub const TITLE: &str = "TimeWorld Forum";

pub struct CardRow {
    pub name: &'static str,
    pub icon: &'static str,
    pub count: usize,
}

pub struct TopicRow {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub replies: u32,
    pub views: u32,
    pub activity: String,
}

pub struct CommentRow {
    pub author: String,
    pub timestamp: String,
    pub body: String,
}

pub struct ActivityRow {
    pub kind: &'static str,
    pub title: String,
    pub category: String,
    pub label: String,
}

pub struct UserRow {
    pub username: String,
    pub role: &'static str,
    pub topics: u32,
    pub comments: u32,
    pub status: &'static str,
}

pub struct ReportRow {
    pub id: u64,
    pub kind: &'static str,
    pub target: String,
    pub reason: String,
    pub reporter: String,
    pub status: &'static str,
}

#[derive(Template)]
#[template(path = "forum.txt")]
pub struct ForumTemplate<'a> {
    pub title: &'a str,
    pub user_line: String,
    pub prompt_open: bool,
    pub pending_line: String,
    pub filter: String,
    pub featured: Vec<CardRow>,
    pub others: Vec<CardRow>,
    pub topics: Vec<TopicRow>,
    /// Pre-rendered topic detail, empty when no topic is open
    pub detail: String,
}

#[derive(Template)]
#[template(path = "topic.txt")]
pub struct TopicTemplate {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub activity: String,
    pub icon: &'static str,
    pub category: String,
    pub body: String,
    pub comments: Vec<CommentRow>,
}

#[derive(Template)]
#[template(path = "profile.txt")]
pub struct ProfileTemplate {
    pub username: String,
    pub role: &'static str,
    pub is_admin: bool,
    pub topic_count: usize,
    pub comment_count: usize,
    pub recent: Vec<ActivityRow>,
}

#[derive(Template)]
#[template(path = "admin.txt")]
pub struct AdminTemplate {
    pub total_topics: usize,
    pub total_users: usize,
    pub active_users: usize,
    pub pending_reports: usize,
    pub topics: Vec<TopicRow>,
    pub users: Vec<UserRow>,
    pub reports: Vec<ReportRow>,
}

/// Renders whichever screen the forum selected.
pub fn render(screen: &Screen) -> askama::Result<String> {
    match screen {
        Screen::Forum(forum) => render_forum(forum),
        Screen::Profile(profile) => render_profile(profile),
        Screen::Admin(panel) => render_admin(panel),
    }
}

pub fn render_forum(screen: &ForumScreen) -> askama::Result<String> {
    let detail = match &screen.open {
        Some(open) => render_topic(open)?,
        None => String::new(),
    };
    let user_line = match &screen.session {
        Some(s) if s.is_admin() => format!("Signed in as {} [admin]", s.username),
        Some(s) => format!("Signed in as {}", s.username),
        None => "Not signed in".to_string(),
    };

    ForumTemplate {
        title: TITLE,
        user_line,
        prompt_open: screen.auth_prompt_open,
        pending_line: screen
            .pending
            .as_ref()
            .map(|p| format!("waiting to {}", p.describe()))
            .unwrap_or_default(),
        filter: screen.filter.to_string(),
        featured: screen.featured.iter().map(card_row).collect(),
        others: screen.others.iter().map(card_row).collect(),
        topics: screen.topics.iter().map(topic_row).collect(),
        detail,
    }
    .render()
}

pub fn render_topic(detail: &TopicDetail) -> askama::Result<String> {
    let topic = &detail.topic;
    TopicTemplate {
        id: topic.id,
        title: topic.title.clone(),
        author: topic.author.clone(),
        activity: topic.last_activity.clone(),
        icon: detail.category.icon,
        category: topic.category.clone(),
        body: topic.body.clone(),
        comments: detail
            .comments
            .iter()
            .map(|c| CommentRow {
                author: c.author.clone(),
                timestamp: c.timestamp.clone(),
                body: c.body.clone(),
            })
            .collect(),
    }
    .render()
}

pub fn render_profile(profile: &Profile) -> askama::Result<String> {
    ProfileTemplate {
        username: profile.username.clone(),
        role: profile.role.as_str(),
        is_admin: profile.is_admin,
        topic_count: profile.topic_count,
        comment_count: profile.comment_count,
        recent: profile
            .recent
            .iter()
            .map(|a| ActivityRow {
                kind: match a.kind {
                    tw_forum::ActivityKind::Topic => "topic",
                    tw_forum::ActivityKind::Comment => "comment",
                },
                title: a.title.clone(),
                category: a.category.clone(),
                label: a.label.clone(),
            })
            .collect(),
    }
    .render()
}

pub fn render_admin(panel: &AdminPanel) -> askama::Result<String> {
    AdminTemplate {
        total_topics: panel.stats.total_topics,
        total_users: panel.stats.total_users,
        active_users: panel.stats.active_users,
        pending_reports: panel.stats.pending_reports,
        topics: panel.topics.iter().map(topic_row).collect(),
        users: panel.users.iter().map(user_row).collect(),
        reports: panel.reports.iter().map(report_row).collect(),
    }
    .render()
}

fn card_row(card: &CategoryCard) -> CardRow {
    CardRow {
        name: card.category.name,
        icon: card.category.icon,
        count: card.topic_count,
    }
}

fn topic_row(topic: &Topic) -> TopicRow {
    TopicRow {
        id: topic.id,
        title: topic.title.clone(),
        author: topic.author.clone(),
        // unknown names are shown under the default category
        category: categories::resolve(&topic.category).name.to_string(),
        replies: topic.reply_count,
        views: topic.view_count,
        activity: topic.last_activity.clone(),
    }
}

fn user_row(user: &UserRecord) -> UserRow {
    UserRow {
        username: user.username.clone(),
        role: user.role.as_str(),
        topics: user.topic_count,
        comments: user.comment_count,
        status: match user.status {
            UserStatus::Active => "active",
            UserStatus::Banned => "banned",
        },
    }
}

fn report_row(report: &Report) -> ReportRow {
    ReportRow {
        id: report.id,
        kind: report.kind.as_str(),
        target: report.target.clone(),
        reason: report.reason.clone(),
        reporter: report.reporter.clone(),
        status: if report.is_pending() { "pending" } else { "resolved" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_auth_simple::SimpleAuthProvider;
    use tw_core::TopicDraft;
    use tw_fixtures::{FixtureReportStore, FixtureUserDirectory};
    use tw_forum::{Forum, View};

    fn forum() -> Forum {
        Forum::new(
            Box::new(SimpleAuthProvider::default()),
            Box::new(FixtureUserDirectory::default()),
            Box::new(FixtureReportStore::default()),
        )
    }

    #[test]
    fn test_empty_forum_screen() {
        let out = render(&forum().screen()).unwrap();
        assert!(out.contains(TITLE));
        assert!(out.contains("Not signed in"));
        assert!(out.contains("(no topics yet)"));
        assert!(out.contains("[Shield] Helper (0 topics)"));
        assert!(out.contains("- Идеи (0 topics)"));
    }

    #[test]
    fn test_open_topic_shows_comments() {
        let mut f = forum();
        f.login("Steve").unwrap();
        let t = f.create_topic(TopicDraft::new("Bug report", "Баги", "portal is broken")).unwrap();
        f.open_topic(t.id).unwrap();
        f.add_comment("same here").unwrap();

        let out = render(&f.screen()).unwrap();
        assert!(out.contains("Signed in as Steve"));
        assert!(out.contains("#1 [Баги] Bug report | Steve | 1 replies"));
        assert!(out.contains("--- #1 Bug report ---"));
        assert!(out.contains("Comments (1):"));
        assert!(out.contains("Steve (just now): same here"));
    }

    #[test]
    fn test_unknown_category_uses_default_name() {
        let mut f = forum();
        f.login("Steve").unwrap();
        f.create_topic(TopicDraft::new("Odd", "Nonexistent", "x")).unwrap();
        let out = render(&f.screen()).unwrap();
        assert!(out.contains("#1 [Helper] Odd"));
    }

    #[test]
    fn test_pending_prompt_is_rendered() {
        let mut f = forum();
        let _ = f.create_topic(TopicDraft::new("Later", "Идеи", "x"));
        let out = render(&f.screen()).unwrap();
        assert!(out.contains("[login required] waiting to create topic \"Later\""));
    }

    #[test]
    fn test_quoted_titles_render_verbatim() {
        let title = "Say \"hi\"\tnow";
        let mut f = forum();
        let _ = f.create_topic(TopicDraft::new(title, "Идеи", "x"));
        let out = render(&f.screen()).unwrap();
        assert!(out.contains("waiting to create topic \"Say \"hi\"\tnow\""));
        assert!(!out.contains("\\\""));

        f.login("Steve").unwrap();
        f.open_topic(1).unwrap();
        f.add_comment("reply").unwrap();
        f.set_view(View::Profile).unwrap();
        let out = render(&f.screen()).unwrap();
        assert!(out.contains("[comment] Reply to \"Say \"hi\"\tnow\" (Идеи)"));
        assert!(!out.contains("\\t"));
    }

    #[test]
    fn test_admin_screen() {
        let mut f = forum();
        f.login("admin").unwrap();
        f.create_topic(TopicDraft::new("Rules", "Helper", "x")).unwrap();
        f.set_view(View::Admin).unwrap();

        let out = render(&f.screen()).unwrap();
        assert!(out.contains("Topics: 1 | Users: 3 | Active: 2 | Pending reports: 2"));
        assert!(out.contains("Creeper_King (user) | 2 topics | 12 comments | banned"));
        assert!(out.contains("#3 [comment]"));
    }

    #[test]
    fn test_profile_screen() {
        let mut f = forum();
        f.login("admin").unwrap();
        f.create_topic(TopicDraft::new("Rules", "Helper", "x")).unwrap();
        f.set_view(View::Profile).unwrap();

        let out = render(&f.screen()).unwrap();
        assert!(out.contains("=== admin ==="));
        assert!(out.contains("[Administrator]"));
        assert!(out.contains("Topics: 1 | Comments: 0"));
        assert!(out.contains("[topic] Rules (Helper) just now"));
    }
}
