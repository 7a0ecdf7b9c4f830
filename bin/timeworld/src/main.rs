//! # TimeWorld Binary
//!
//! Assembles the forum from its plugins and drives it from stdin.

mod commands;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use commands::{Command, HELP};
use tw_auth_simple::SimpleAuthProvider;
use tw_config::AppConfig;
use tw_fixtures::{FixtureReportStore, FixtureUserDirectory};
use tw_forum::{Effect, Forum, ForumSettings, Replayed};

fn main() -> anyhow::Result<()> {
    let dotenv = tw_config::load_dotenv();
    let config = AppConfig::load().context("loading configuration")?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log.filter.as_str()));
    if let Some(path) = dotenv {
        log::debug!("loaded environment from {}", path.display());
    }

    // 1. Plugins
    let auth = SimpleAuthProvider::new(&config.auth.admin_name);
    let users = FixtureUserDirectory::new(config.fixtures.enabled);
    let reports = FixtureReportStore::new(config.fixtures.enabled);

    // 2. State container
    let mut forum = Forum::with_settings(
        Box::new(auth),
        Box::new(users),
        Box::new(reports),
        ForumSettings {
            just_now_label: config.forum.just_now_label.clone(),
            featured_categories: config.forum.featured_categories,
        },
    );

    log::info!("TimeWorld shell starting (admin name: {})", config.auth.admin_name);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", tw_ui::render(&forum.screen())?)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Show) => writeln!(out, "{}", tw_ui::render(&forum.screen())?)?,
            Ok(Command::Stats) => {
                let stats = forum.compute_stats();
                writeln!(
                    out,
                    "topics: {}, users: {}, active users: {}, pending reports: {}",
                    stats.total_topics, stats.total_users, stats.active_users, stats.pending_reports
                )?;
            }
            Ok(Command::Snapshot) => writeln!(out, "{}", forum.snapshot().to_json()?)?,
            Ok(Command::Forum(action)) => match forum.dispatch(action) {
                Ok(effect) => {
                    writeln!(out, "{}", describe(&effect))?;
                    writeln!(out, "{}", tw_ui::render(&forum.screen())?)?;
                }
                Err(err) => writeln!(out, "! {}", err)?,
            },
            Err(msg) => writeln!(out, "! {}", msg)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    log::info!("TimeWorld shell stopped");
    Ok(())
}

fn describe(effect: &Effect) -> String {
    match effect {
        Effect::LoggedIn(outcome) => {
            let mut msg = format!(
                "Welcome, {} ({})",
                outcome.session.username,
                outcome.session.role.as_str()
            );
            match &outcome.replayed {
                Some(Replayed::Topic(Ok(t))) => msg.push_str(&format!("; posted topic #{}", t.id)),
                Some(Replayed::Comment(Ok(c))) => {
                    msg.push_str(&format!("; posted comment #{}", c.id))
                }
                Some(Replayed::Topic(Err(e)) | Replayed::Comment(Err(e))) => {
                    msg.push_str(&format!("; pending action failed: {}", e))
                }
                None => {}
            }
            msg
        }
        Effect::LoggedOut => "Signed out".to_string(),
        Effect::PromptShown => "Please sign in: login <name>".to_string(),
        Effect::PromptClosed { dropped: Some(intent) } => {
            format!("Login cancelled; dropped: {}", intent.describe())
        }
        Effect::PromptClosed { dropped: None } => "Login cancelled".to_string(),
        Effect::ViewChanged(view) => format!("View: {:?}", view),
        Effect::FilterChanged(filter) => format!("Filter: {}", filter),
        Effect::TopicCreated(t) => format!("Topic #{} created", t.id),
        Effect::TopicDeleted(Some(t)) => format!("Topic #{} deleted", t.id),
        Effect::TopicDeleted(None) => "No such topic".to_string(),
        Effect::TopicApproved(id) => format!("Topic #{} approved", id),
        Effect::TopicOpened(id) => format!("Topic #{} opened", id),
        Effect::TopicClosed => "Topic closed".to_string(),
        Effect::CommentAdded(c) => format!("Comment #{} added", c.id),
    }
}
