//! Shell command parsing.
//!
//! One line, one command. Topic creation takes `|`-separated fields because
//! category names contain spaces.

use tw_core::{CategoryFilter, TopicDraft, TopicId};
use tw_forum::{Action, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Forum(Action),
    Show,
    Stats,
    Snapshot,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  login <name>                      sign in (\"admin\" gets the admin role)
  register <name> <email>           create an account and sign in
  signin                            show the login prompt
  cancel                            dismiss the login prompt
  logout                            sign out
  view forum|profile|admin          switch screens
  filter <category>|all             filter the topic list
  new <category> | <title> | <body> create a topic
  open <id> / close                 show or hide a topic
  comment <text>                    reply to the open topic
  delete <id> / approve <id>        moderation
  show / stats / snapshot           render, admin counts, JSON state
  help / quit";

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let action = match word.to_lowercase().as_str() {
            "" | "show" => return Ok(Command::Show),
            "stats" => return Ok(Command::Stats),
            "snapshot" => return Ok(Command::Snapshot),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" => return Ok(Command::Quit),

            "login" => Action::Login { username: rest.to_string() },
            "register" => {
                let (username, email) = rest
                    .split_once(char::is_whitespace)
                    .ok_or("usage: register <name> <email>")?;
                Action::Register {
                    username: username.to_string(),
                    email: email.trim().to_string(),
                }
            }
            "signin" => Action::RequestLogin,
            "cancel" => Action::CancelLogin,
            "logout" => Action::Logout,
            "view" => Action::SetView(rest.parse::<View>()?),
            "filter" => Action::SetFilter(rest.parse::<CategoryFilter>().unwrap_or_default()),
            "new" => {
                let mut parts = rest.splitn(3, '|').map(str::trim);
                let category = parts.next().unwrap_or_default();
                let title = parts.next().unwrap_or_default();
                let body = parts.next().unwrap_or_default();
                Action::CreateTopic(TopicDraft::new(title, category, body))
            }
            "open" => Action::OpenTopic(parse_id(rest)?),
            "close" => Action::CloseTopic,
            "comment" => Action::AddComment { body: rest.to_string() },
            "delete" => Action::DeleteTopic(parse_id(rest)?),
            "approve" => Action::ApproveTopic(parse_id(rest)?),
            other => return Err(format!("unknown command: {} (try `help`)", other)),
        };
        Ok(Command::Forum(action))
    }
}

fn parse_id(s: &str) -> Result<TopicId, String> {
    s.trim_start_matches('#')
        .parse()
        .map_err(|_| format!("not a topic id: {:?}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_topic() {
        let cmd = Command::parse("new Жалоба на игроков | Griefer | broke my house").unwrap();
        assert_eq!(
            cmd,
            Command::Forum(Action::CreateTopic(TopicDraft::new(
                "Griefer",
                "Жалоба на игроков",
                "broke my house"
            )))
        );
    }

    #[test]
    fn test_parse_incomplete_topic_keeps_empty_fields() {
        let Command::Forum(Action::CreateTopic(draft)) = Command::parse("new Баги | Title").unwrap() else {
            panic!("expected create topic");
        };
        assert_eq!(draft.missing_field(), Some("body"));
    }

    #[test]
    fn test_parse_ids_and_views() {
        assert_eq!(Command::parse("open #3").unwrap(), Command::Forum(Action::OpenTopic(3)));
        assert_eq!(Command::parse("delete 2").unwrap(), Command::Forum(Action::DeleteTopic(2)));
        assert!(Command::parse("open three").is_err());
        assert_eq!(
            Command::parse("view Admin").unwrap(),
            Command::Forum(Action::SetView(View::Admin))
        );
        assert!(Command::parse("view settings").is_err());
    }

    #[test]
    fn test_parse_filter_and_login() {
        assert_eq!(
            Command::parse("filter all").unwrap(),
            Command::Forum(Action::SetFilter(CategoryFilter::All))
        );
        assert_eq!(
            Command::parse("login   Steve ").unwrap(),
            Command::Forum(Action::Login { username: "Steve".into() })
        );
        assert_eq!(
            Command::parse("login").unwrap(),
            Command::Forum(Action::Login { username: String::new() })
        );
        assert!(Command::parse("register Steve").is_err());
    }

    #[test]
    fn test_shell_commands() {
        assert_eq!(Command::parse("").unwrap(), Command::Show);
        assert_eq!(Command::parse("QUIT").unwrap(), Command::Quit);
        assert!(Command::parse("dance").is_err());
    }
}
