mod commands;

use clap::Parser;
use commands::Command;
use paper_assistant::{parse_history_limit, render, Config, Session, DEFAULT_BASE_URL};
use std::path::PathBuf;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Upload a research paper and ask questions about it.
#[derive(Debug, Parser)]
#[command(name = "paper-assistant", version)]
struct Args {
    /// Base URL of the assistant service
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Keep at most this many history entries (invalid values mean no limit)
    #[arg(long, env = "HISTORY_LIMIT")]
    history_limit: Option<String>,

    /// PDF to upload at startup
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("paper-assistant: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let history_limit = args.history_limit.as_deref().and_then(parse_history_limit);
    let session = Session::new(Config::new(args.base_url, history_limit));

    println!("Research Paper Assistant ({})", session.base_url());
    println!("Upload → Ask → Understand. Type /help for commands.\n");
    print!("{}", render::hints());

    if let Some(path) = args.file {
        commands::execute(&session, Command::Open(path)).await;
        commands::execute(&session, Command::Upload).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => commands::execute(&session, command).await,
            Err(message) => println!("{}", message),
        }
    }

    log::info!("Session closed");
    Ok(())
}
