use integration_tests::{demo_forum, draft};
use tw_core::{categories, CategoryFilter, Role, TopicDraft, CATEGORIES};

#[test]
fn created_topics_are_newest_first() {
    let mut forum = demo_forum();
    forum.login("Steve").unwrap();

    let mut created = 0;
    for (i, category) in CATEGORIES.iter().cycle().take(12).enumerate() {
        forum.create_topic(draft(&format!("topic {}", i), category.name)).unwrap();
        created += 1;
    }
    // invalid drafts do not count
    let _ = forum.create_topic(TopicDraft::new("no body", "Баги", ""));

    let ids: Vec<_> = forum.topics().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), created);
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn deleted_topics_never_come_back() {
    let mut forum = demo_forum();
    forum.login("admin").unwrap();
    for i in 0..4 {
        forum.create_topic(draft(&format!("t{}", i), "Идеи")).unwrap();
    }
    forum.delete_topic(2);
    let fresh = forum.create_topic(draft("fresh", "Идеи")).unwrap();

    let all = forum.filter_by_category(&CategoryFilter::All);
    assert!(all.iter().all(|t| t.id != 2));
    assert_eq!(fresh.id, 5);

    let mut ids: Vec<_> = all.iter().map(|t| t.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn category_filters_partition_the_collection() {
    let mut forum = demo_forum();
    forum.login("Steve").unwrap();
    for (i, name) in ["Баги", "Идеи", "Баги", "Helper", "Unknown"].iter().enumerate() {
        forum.create_topic(draft(&format!("t{}", i), name)).unwrap();
    }

    let mut seen: Vec<u64> = Vec::new();
    for category in CATEGORIES.iter() {
        let filtered = forum.filter_by_category(&CategoryFilter::only(category.name));
        assert!(filtered.iter().all(|t| t.category == category.name));
        seen.extend(filtered.iter().map(|t| t.id));
    }
    let unknown = forum.filter_by_category(&CategoryFilter::only("Unknown"));
    seen.extend(unknown.iter().map(|t| t.id));
    seen.sort_unstable();

    let mut all: Vec<u64> = forum
        .filter_by_category(&"all".parse().unwrap())
        .iter()
        .map(|t| t.id)
        .collect();
    all.sort_unstable();
    assert_eq!(seen, all);
}

#[test]
fn comment_increments_reply_count_once() {
    let mut forum = demo_forum();
    forum.login("Steve").unwrap();
    let topic = forum.create_topic(draft("Bug report", "Баги")).unwrap();
    let other = forum.create_topic(draft("Other", "Баги")).unwrap();
    forum.open_topic(topic.id).unwrap();

    let comment = forum.add_comment("confirmed").unwrap();
    assert_eq!(comment.author, "Steve");
    assert_eq!(forum.topic(topic.id).unwrap().reply_count, 1);
    assert_eq!(forum.topic(other.id).unwrap().reply_count, 0);
    assert_eq!(forum.comments_for(topic.id).len(), 1);
}

#[test]
fn login_role_derivation() {
    let mut forum = demo_forum();
    assert_eq!(forum.login("admin").unwrap().session.role, Role::Admin);
    assert_eq!(forum.login("AnyOtherName").unwrap().session.role, Role::User);
    let padded = forum.login(" admin ").unwrap().session;
    assert_eq!(padded.role, Role::User);
    assert_eq!(padded.username, "admin");
    assert!(forum.login("").is_err());
    assert_eq!(forum.session().unwrap().username, "admin");
    assert!(!forum.is_admin());
}

#[test]
fn bug_report_scenario() {
    let mut forum = demo_forum();
    assert!(forum.topics().is_empty());
    forum.login("Steve").unwrap();

    let topic = forum
        .create_topic(TopicDraft::new("Bug report", "Баги", "text"))
        .unwrap();
    assert_eq!(topic.id, 1);
    assert_eq!(topic.author, "Steve");
    assert_eq!(topic.reply_count, 0);
    assert_eq!(topic.category, "Баги");

    forum.delete_topic(1);
    assert!(forum.topics().is_empty());
}

#[test]
fn unknown_category_resolves_to_default() {
    assert_eq!(
        categories::resolve("NonexistentCategory"),
        categories::resolve(CATEGORIES[0].name)
    );
}

#[test]
fn approve_topic_changes_nothing() {
    let mut forum = demo_forum();
    forum.login("admin").unwrap();
    forum.create_topic(draft("t", "Баги")).unwrap();
    let before = forum.snapshot();
    forum.approve_topic(1);
    assert_eq!(forum.snapshot(), before);
}
