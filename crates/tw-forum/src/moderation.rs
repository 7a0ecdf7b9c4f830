//! # Moderation aggregator
//!
//! Read-only counts for the admin panel. Users and reports come from the
//! injected collaborators; nothing here mutates them.

use serde::Serialize;
use tw_core::{Report, Topic, UserRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModerationStats {
    pub total_topics: usize,
    pub total_users: usize,
    pub pending_reports: usize,
    pub active_users: usize,
}

pub fn compute_stats(topics: &[Topic], users: &[UserRecord], reports: &[Report]) -> ModerationStats {
    ModerationStats {
        total_topics: topics.len(),
        total_users: users.len(),
        pending_reports: reports.iter().filter(|r| r.is_pending()).count(),
        active_users: users.iter().filter(|u| u.is_active()).count(),
    }
}

/// Everything the admin screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminPanel {
    pub stats: ModerationStats,
    pub topics: Vec<Topic>,
    pub users: Vec<UserRecord>,
    pub reports: Vec<Report>,
}

impl AdminPanel {
    pub fn new(topics: Vec<Topic>, users: Vec<UserRecord>, reports: Vec<Report>) -> Self {
        let stats = compute_stats(&topics, &users, &reports);
        Self { stats, topics, users, reports }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_core::{ReportKind, ReportStatus, Role, UserStatus};

    fn user(id: u64, status: UserStatus) -> UserRecord {
        UserRecord {
            id,
            username: format!("user{}", id),
            role: Role::User,
            topic_count: 0,
            comment_count: 0,
            status,
        }
    }

    fn report(id: u64, status: ReportStatus) -> Report {
        Report {
            id,
            kind: ReportKind::Topic,
            target: "spam".into(),
            reporter: "someone".into(),
            reason: "ads".into(),
            status,
        }
    }

    #[test]
    fn test_stats_count_each_collection() {
        let users = vec![
            user(1, UserStatus::Active),
            user(2, UserStatus::Active),
            user(3, UserStatus::Banned),
        ];
        let reports = vec![
            report(1, ReportStatus::Pending),
            report(2, ReportStatus::Pending),
            report(3, ReportStatus::Resolved),
        ];
        let stats = compute_stats(&[], &users, &reports);
        assert_eq!(
            stats,
            ModerationStats { total_topics: 0, total_users: 3, pending_reports: 2, active_users: 2 }
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(compute_stats(&[], &[], &[]), ModerationStats::default());
    }
}
