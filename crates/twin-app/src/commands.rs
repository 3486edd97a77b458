//! One-shot subcommands: `ask`, `health`, `history`.

use std::process::ExitCode;

use twin_chat::{ChatError, ChatSession, HttpBackend, SessionId, SubmitOutcome};
use twin_common::TwinError;

use crate::render;

pub(crate) fn chat_error(e: ChatError) -> TwinError {
    TwinError::Chat(e.to_string())
}

/// Send one message and print the exchange plus the session id.
pub async fn ask(session: &ChatSession, text: &str, max_input_chars: usize) -> ExitCode {
    let len = text.trim().chars().count();
    if len > max_input_chars {
        eprintln!("Message too long ({len} characters, limit is {max_input_chars})");
        return ExitCode::FAILURE;
    }

    let outcome = session.submit(text).await;
    render::print_messages(&session.messages());
    if let Some(id) = session.session_id() {
        eprintln!("session: {id}");
    }

    match outcome {
        SubmitOutcome::Answered(_) | SubmitOutcome::Failed(_) => ExitCode::SUCCESS,
        SubmitOutcome::Ignored(reason) => {
            eprintln!("Nothing sent ({reason:?})");
            ExitCode::FAILURE
        }
    }
}

pub async fn health(backend: &HttpBackend) -> ExitCode {
    let base = &backend.config().base_url;
    match backend.health().await {
        Ok(status) if status.is_ok() => {
            println!("{base}: ok");
            ExitCode::SUCCESS
        }
        Ok(status) => {
            println!("{base}: {}", status.status);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            println!("{base}: unreachable ({e})");
            ExitCode::FAILURE
        }
    }
}

pub async fn history(backend: &HttpBackend, session_id: &SessionId) -> twin_common::Result<ExitCode> {
    let record = backend.conversation(session_id).await.map_err(chat_error)?;
    if record.messages.is_empty() {
        println!("No messages in session {}", record.session_id);
    }
    for msg in &record.messages {
        println!("{}", render::format_recorded(msg));
    }
    Ok(ExitCode::SUCCESS)
}
