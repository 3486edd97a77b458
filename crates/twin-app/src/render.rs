//! Plain-text rendering of transcript lines for the terminal.

use chrono::Local;
use twin_chat::{Message, RecordedMessage, Role};

fn label(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "twin",
    }
}

/// `[HH:MM:SS] you> text`, with the timestamp in local time.
pub fn format_message(msg: &Message) -> String {
    let local = msg.timestamp.with_timezone(&Local);
    format!(
        "[{}] {}> {}",
        local.format("%H:%M:%S"),
        label(msg.role),
        msg.content
    )
}

/// Server-side history entry; the stored timestamp is shown verbatim.
pub fn format_recorded(msg: &RecordedMessage) -> String {
    match msg.timestamp.as_deref() {
        Some(ts) => format!("[{ts}] {}> {}", label(msg.role), msg.content),
        None => format!("{}> {}", label(msg.role), msg.content),
    }
}

pub fn print_messages(messages: &[Message]) {
    for msg in messages {
        println!("{}", format_message(msg));
    }
}
