use fake::faker::internet::en::{SafeEmail, Username};
use fake::Fake;
use mockall::predicate::eq;
use tw_auth_simple::SimpleAuthProvider;
use tw_core::{
    AuthProvider, MockAuthProvider, MockReportStore, MockUserDirectory, Role, Session,
};
use tw_fixtures::{FixtureReportStore, FixtureUserDirectory};
use tw_forum::Forum;

#[test]
fn forum_delegates_login_to_auth_provider() {
    let mut auth = MockAuthProvider::new();
    auth.expect_login()
        .with(eq("Herobrine"))
        .times(1)
        .returning(|name| Some(Session::new(name, Role::Admin)));

    let mut forum = Forum::new(
        Box::new(auth),
        Box::new(FixtureUserDirectory::default()),
        Box::new(FixtureReportStore::default()),
    );
    let outcome = forum.login("Herobrine").unwrap();
    assert_eq!(outcome.session.role, Role::Admin);
    assert!(forum.is_admin());
}

#[test]
fn stats_query_each_collaborator_once() {
    let mut users = MockUserDirectory::new();
    users.expect_list_users().times(1).returning(Vec::new);
    let mut reports = MockReportStore::new();
    reports.expect_list_reports().times(1).returning(Vec::new);

    let forum = Forum::new(
        Box::new(SimpleAuthProvider::default()),
        Box::new(users),
        Box::new(reports),
    );
    let stats = forum.compute_stats();
    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.pending_reports, 0);
}

#[test]
fn simple_auth_registers_arbitrary_members_as_users() {
    let auth = SimpleAuthProvider::default();
    for _ in 0..20 {
        let name: String = Username().fake();
        let email: String = SafeEmail().fake();
        let session = auth.register(&name, &email).unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(session.username, name.trim());
    }
}
