use paper_assistant::{render, AssistantError, Session};
use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  /open <path>      choose a PDF
  /upload           upload the chosen PDF
  /ask <question>   ask about the uploaded paper (plain text works too)
  /doc              show the current document
  /history          show the conversation history
  /clear            clear the conversation history
  /status           check the service
  /help             show this help
  /quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    Upload,
    Ask(String),
    Document,
    History,
    Clear,
    Status,
    Help,
    Quit,
    Nothing,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Nothing);
        }
        if !line.starts_with('/') {
            return Ok(Command::Ask(line.to_string()));
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/open" if rest.is_empty() => Err("usage: /open <path>".to_string()),
            "/open" => Ok(Command::Open(PathBuf::from(rest))),
            "/upload" => Ok(Command::Upload),
            // An empty /ask is passed through so the session reports it.
            "/ask" => Ok(Command::Ask(rest.to_string())),
            "/doc" => Ok(Command::Document),
            "/history" => Ok(Command::History),
            "/clear" => Ok(Command::Clear),
            "/status" => Ok(Command::Status),
            "/help" => Ok(Command::Help),
            "/quit" | "/exit" => Ok(Command::Quit),
            other => Err(format!("unknown command {other}; try /help")),
        }
    }
}

pub async fn execute(session: &Session, command: Command) {
    match command {
        Command::Open(path) => match session.choose_file(&path).await {
            Ok(()) => println!("Selected {}. Run /upload to send it.", path.display()),
            Err(e) => report(&e),
        },
        Command::Upload => {
            let view = session.view().await;
            if view.can_upload() {
                if let Some(name) = &view.selected_file {
                    println!("Uploading {}…", name);
                }
            }
            match session.upload().await {
                Ok(document) => print!("{}", render::document_card(&document)),
                Err(e) => report(&e),
            }
        }
        Command::Ask(question) => match session.ask_question(question).await {
            Ok(record) => print!("{}", render::answer_card(&record.answer)),
            Err(e) => report(&e),
        },
        Command::Document => print!("{}", render::status(&session.view().await)),
        Command::History => print!("{}", render::history_section(&session.view().await)),
        Command::Clear => {
            session.clear_history().await;
            println!("History cleared.");
        }
        Command::Status => match session.health().await {
            Ok(health) => println!("{}: {}", health.status, health.message),
            Err(e) => {
                log::warn!("Health check failed: {}", e);
                println!("Service unreachable at {}: {}", session.base_url(), e);
            }
        },
        Command::Help => println!("{}", HELP),
        Command::Quit | Command::Nothing => {}
    }
}

fn report(err: &AssistantError) {
    if err.is_validation() {
        log::debug!("Rejected before sending: {}", err);
    } else {
        log::warn!("Action failed: {:?}", err);
    }
    print!("{}", render::error_banner(&err.to_string()));
}
