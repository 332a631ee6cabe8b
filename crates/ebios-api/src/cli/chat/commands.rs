//! Slash command parsing and help for the chat loop.

use console::style;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    /// Clear the conversation (server and saved history).
    Clear,
    History,
    /// Pick a feature card; without a name, list them.
    Feature(Option<String>),
    /// Switch section; without a name, show the current one.
    Section(Option<String>),
    /// Re-check the server connection.
    Status,
    Exit,
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(' ') {
        Some((cmd, arg)) => (cmd, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (trimmed, None),
    };
    let arg = arg.map(str::to_string);

    match cmd.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" => Some(ChatCommand::Clear),
        "/history" => Some(ChatCommand::History),
        "/feature" | "/f" => Some(ChatCommand::Feature(arg)),
        "/section" | "/s" => Some(ChatCommand::Section(arg)),
        "/status" => Some(ChatCommand::Status),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

pub fn print_help() {
    let rows = [
        ("/help", "Show this help message"),
        ("/clear", "Clear the chat history"),
        ("/history", "Show this conversation"),
        ("/feature [name]", "Pick a feature prompt, or list features"),
        ("/section [name]", "Switch to chat, features or about"),
        ("/status", "Check the server connection"),
        ("/exit", "End the chat session"),
    ];

    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    for (command, description) in rows {
        println!("  {:<18} {}", style(command).cyan(), description);
    }
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
