//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline`, mapping Ctrl+D and Ctrl+C to events.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (trimmed).
    Message(String),
    /// Ctrl+D
    Eof,
    /// Ctrl+C
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
    prompt: String,
}

impl ChatInput {
    /// Create the input handler. The returned `SharedWriter` prints above
    /// the prompt without corrupting it.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt.clone())?;
        Ok((Self { rl, prompt }, stdout))
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let trimmed = line.trim().to_string();
                if !trimmed.is_empty() {
                    self.rl.add_history_entry(trimmed.clone());
                }
                InputEvent::Message(trimmed)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Ask a yes/no question on the input line. Anything but `y`/`yes` is no.
    pub async fn confirm(&mut self, question: &str) -> bool {
        let _ = self.rl.update_prompt(&format!("  {question} [y/N] "));
        let answer = match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
            }
            _ => false,
        };
        let _ = self.rl.update_prompt(&self.prompt);
        answer
    }
}
