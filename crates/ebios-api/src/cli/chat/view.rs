//! Terminal [`ChatView`].
//!
//! Messages print as labelled lines. A reply being revealed prints one
//! character at a time and ends its own line once every character is out.
//! The typing indicator is an indicatif spinner.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use ebios_core::client::notify::{Notification, NotificationKind};
use ebios_core::client::view::ChatView;
use ebios_types::chat::{ChatMessage, MessageKind};

#[derive(Default)]
pub struct TerminalView {
    spinner: Mutex<Option<ProgressBar>>,
    remaining: AtomicUsize,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new reveal of `count` characters. Returns `true` when the
    /// previous reveal was cut off and its line is still open.
    fn start_reveal_line(&self, count: usize) -> bool {
        self.remaining.swap(count, Ordering::AcqRel) > 0
    }

    /// Stop tracking the current reveal. Returns `true` when its line is
    /// still open.
    fn abandon_reveal_line(&self) -> bool {
        self.remaining.swap(0, Ordering::AcqRel) > 0
    }
}

fn label(kind: MessageKind) -> String {
    match kind {
        MessageKind::User => style("You >").green().bold().to_string(),
        MessageKind::Assistant => style("Ebios >").cyan().bold().to_string(),
    }
}

impl ChatView for TerminalView {
    fn render_message(&self, message: &ChatMessage) {
        println!(
            "  {} {}  {}",
            label(message.kind),
            message.content,
            style(&message.timestamp).dim()
        );
    }

    fn begin_reveal(&self, message: &ChatMessage) {
        let count = message.content.chars().count();
        if self.start_reveal_line(count) {
            println!();
        }
        print!("  {} ", label(message.kind));
        if count == 0 {
            println!();
        }
        let _ = std::io::stdout().flush();
    }

    fn reveal_char(&self, ch: char) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "{ch}");
        let before = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .unwrap_or(0);
        if before == 1 {
            let _ = writeln!(out);
        }
        let _ = out.flush();
    }

    fn set_typing(&self, visible: bool) {
        let mut spinner = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(bar) = spinner.take() {
            bar.finish_and_clear();
        }
        if visible {
            let bar = ProgressBar::new_spinner();
            if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
                bar.set_style(spinner_style);
            }
            bar.set_message("Ebios AI is typing...");
            bar.enable_steady_tick(Duration::from_millis(80));
            *spinner = Some(bar);
        }
    }

    fn show_notification(&self, notification: &Notification) {
        let message = match notification.kind {
            NotificationKind::Success => style(&notification.message).green(),
            NotificationKind::Error => style(&notification.message).red(),
            NotificationKind::Info => style(&notification.message).dim(),
        };
        println!("  {} {}", notification.kind.icon(), message);
    }

    fn dismiss_notification(&self, id: u64) {
        // Printed lines stay in the scrollback.
        tracing::trace!(id, "Notification dismissed");
    }

    fn clear_messages(&self) {
        if self.abandon_reveal_line() {
            println!();
        }
        println!();
        println!("  {}", style("--- chat cleared ---").dim());
        println!();
    }
}
