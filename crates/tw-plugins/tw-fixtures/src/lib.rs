//! # tw-fixtures
//!
//! Static implementations of `UserDirectory` and `ReportStore` serving the
//! demo members and reports shown in the admin panel.

use tw_core::{
    Report, ReportKind, ReportStatus, ReportStore, Role, UserDirectory, UserRecord, UserStatus,
};

/// Fixed member list. Disabled directories list nobody.
pub struct FixtureUserDirectory {
    enabled: bool,
}

impl FixtureUserDirectory {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for FixtureUserDirectory {
    fn default() -> Self {
        Self::new(true)
    }
}

impl UserDirectory for FixtureUserDirectory {
    fn list_users(&self) -> Vec<UserRecord> {
        if !self.enabled {
            return Vec::new();
        }
        vec![
            user(1, "Steve_Minecraft", 5, 23, UserStatus::Active),
            user(2, "Alex_Builder", 8, 45, UserStatus::Active),
            user(3, "Creeper_King", 2, 12, UserStatus::Banned),
        ]
    }
}

fn user(id: u64, name: &str, topics: u32, comments: u32, status: UserStatus) -> UserRecord {
    UserRecord {
        id,
        username: name.to_string(),
        role: Role::User,
        topic_count: topics,
        comment_count: comments,
        status,
    }
}

/// Fixed report queue.
pub struct FixtureReportStore {
    enabled: bool,
}

impl FixtureReportStore {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for FixtureReportStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportStore for FixtureReportStore {
    fn list_reports(&self) -> Vec<Report> {
        if !self.enabled {
            return Vec::new();
        }
        vec![
            Report {
                id: 1,
                kind: ReportKind::Topic,
                target: "Спам в теме".into(),
                reporter: "User123".into(),
                reason: "Реклама сторонних серверов".into(),
                status: ReportStatus::Pending,
            },
            Report {
                id: 2,
                kind: ReportKind::User,
                target: "Bad_Player".into(),
                reporter: "GoodPlayer".into(),
                reason: "Оскорбления в комментариях".into(),
                status: ReportStatus::Pending,
            },
            Report {
                id: 3,
                kind: ReportKind::Comment,
                target: "Комментарий #456".into(),
                reporter: "ModerUser".into(),
                reason: "Нарушение правил форума".into(),
                status: ReportStatus::Resolved,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_users() {
        let users = FixtureUserDirectory::default().list_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users.iter().filter(|u| u.is_active()).count(), 2);
    }

    #[test]
    fn test_fixture_reports() {
        let reports = FixtureReportStore::default().list_reports();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports.iter().filter(|r| r.is_pending()).count(), 2);
    }

    #[test]
    fn test_disabled_fixtures_are_empty() {
        assert!(FixtureUserDirectory::new(false).list_users().is_empty());
        assert!(FixtureReportStore::new(false).list_reports().is_empty());
    }
}
