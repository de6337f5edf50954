use clap::{Parser, Subcommand};
use client::console::Terminal;
use client::network::{ApiClient, QuizBackend};
use client::rendering;
use client::session::QuizSession;
use log::{error, info};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the quiz server
    #[arg(short = 's', long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value = "10")]
    timeout: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Identify or register, answer every question and get a score and rank
    StartQuiz,
    /// List the registered players
    Players,
    /// List the quiz questions and their answers
    Questions,
}

const OVERVIEW: &str = "Hello, this is the Quiz Terminal.
This terminal supports the following commands:
start-quiz -- starts the quiz
players    -- lists the existing players
questions  -- lists the questions and answers used in the quiz";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    let Some(command) = args.command else {
        println!("{}", OVERVIEW);
        return Ok(());
    };

    info!("Using quiz server at {}", args.server);
    let api = ApiClient::new(&args.server, Duration::from_secs(args.timeout))?;

    let result = match command {
        Command::StartQuiz => {
            let mut terminal = Terminal::stdio();
            QuizSession::new(&api, &mut terminal).run().await.map(|_| ())
        }
        Command::Players => api
            .players()
            .await
            .map(|players| println!("{}", rendering::players_table(&players).trim_end())),
        Command::Questions => api
            .questions()
            .await
            .map(|questions| println!("{}", rendering::questions_listing(&questions).trim_end())),
    };

    if let Err(e) = result {
        if e.is_unavailable() {
            error!("Quiz API is unavailable. Try again later.");
        }
        return Err(e.into());
    }

    Ok(())
}
