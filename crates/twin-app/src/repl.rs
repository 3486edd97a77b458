//! Interactive chat loop on stdin/stdout.
//!
//! Every accepted line is submitted on its own task so the loop keeps
//! reading input while a reply is pending; the session decides whether a
//! line is sent or dropped.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use twin_chat::{ChatSession, HttpBackend, IgnoreReason, SubmitOutcome};

use crate::commands::chat_error;
use crate::render;

const HELP: &str = "\
Commands:
  /help      show this help
  /session   show the current session id
  /history   fetch this session's history from the server
  /quit      leave (Ctrl-D works too)";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Blank,
    Message(String),
    TooLong(usize),
    Command(SlashCommand),
}

#[derive(Debug, PartialEq, Eq)]
enum SlashCommand {
    Help,
    Session,
    History,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str, max_input_chars: usize) -> Input {
    let text = line.trim();
    if text.is_empty() {
        return Input::Blank;
    }
    if let Some(name) = text.strip_prefix('/') {
        let cmd = match name {
            "help" | "?" => SlashCommand::Help,
            "session" => SlashCommand::Session,
            "history" => SlashCommand::History,
            "quit" | "exit" => SlashCommand::Quit,
            other => SlashCommand::Unknown(other.to_string()),
        };
        return Input::Command(cmd);
    }
    let len = text.chars().count();
    if len > max_input_chars {
        return Input::TooLong(len);
    }
    Input::Message(text.to_string())
}

fn report(session: &ChatSession, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Answered(reply) | SubmitOutcome::Failed(reply) => {
            render::print_messages(&session.exchange_for(&reply));
        }
        SubmitOutcome::Ignored(IgnoreReason::Busy) => {
            println!("(still waiting for the previous reply; message dropped)");
        }
        SubmitOutcome::Ignored(IgnoreReason::Empty) => {}
    }
}

async fn run_command(cmd: SlashCommand, session: &ChatSession, backend: &HttpBackend) {
    match cmd {
        SlashCommand::Help => println!("{HELP}"),
        SlashCommand::Session => match session.session_id() {
            Some(id) => println!("session: {id}"),
            None => println!("No session yet; send a message first."),
        },
        SlashCommand::History => {
            let Some(id) = session.session_id() else {
                println!("No session yet; send a message first.");
                return;
            };
            match backend.conversation(&id).await.map_err(chat_error) {
                Ok(record) => {
                    for msg in &record.messages {
                        println!("{}", render::format_recorded(msg));
                    }
                }
                Err(e) => {
                    warn!(error = %e, "History lookup failed");
                    println!("Could not fetch history: {e}");
                }
            }
        }
        SlashCommand::Unknown(name) => println!("Unknown command /{name}; try /help"),
        SlashCommand::Quit => {}
    }
}

pub async fn run(
    session: Arc<ChatSession>,
    backend: Arc<HttpBackend>,
    max_input_chars: usize,
) -> twin_common::Result<ExitCode> {
    println!(
        "Chatting with {}. Type /help for commands.",
        backend.config().base_url
    );

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<SubmitOutcome>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line, max_input_chars) {
                    Input::Blank => {}
                    Input::Command(SlashCommand::Quit) => break,
                    Input::Command(cmd) => run_command(cmd, &session, &backend).await,
                    Input::TooLong(len) => {
                        warn!(len, max_input_chars, "Rejecting overlong message");
                        println!("Message too long ({len} characters, limit is {max_input_chars}); not sent.");
                    }
                    Input::Message(text) => {
                        let session = Arc::clone(&session);
                        let tx = outcome_tx.clone();
                        tokio::spawn(async move {
                            let outcome = session.submit(&text).await;
                            let _ = tx.send(outcome);
                        });
                    }
                }
            }
            Some(outcome) = outcome_rx.recv() => report(&session, outcome),
        }
    }

    // Drain replies still in flight before leaving.
    drop(outcome_tx);
    if session.is_busy() {
        println!("Waiting for the pending reply...");
    }
    while let Some(outcome) = outcome_rx.recv().await {
        report(&session, outcome);
    }

    info!(
        messages = session.message_count(),
        session_id = ?session.session_id().map(|id| id.to_string()),
        "Chat ended"
    );
    Ok(ExitCode::SUCCESS)
}
