//! Main chat loop orchestration.
//!
//! Wires the reqwest transport, file storage and terminal view into a
//! [`ChatController`], then reads lines until the user leaves. Each reply
//! is fully revealed before the next line is read.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use tracing::info;

use ebios_core::client::controller::{ChatController, SendOutcome};
use ebios_core::client::sections::Section;
use ebios_core::client::storage::{KeyValueStorage, SESSION_ID_KEY};
use ebios_core::client::transport::ChatTransport;
use ebios_infra::client::{FileStorage, HttpChatTransport};
use ebios_infra::filesystem::client_storage_path;
use ebios_types::chat::{ChatMessage, MessageKind};
use ebios_types::config::GlobalConfig;

use super::banner::{print_about, print_features, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::view::TerminalView;

/// Run the interactive chat loop.
pub async fn run_chat_loop(
    config: &GlobalConfig,
    data_dir: &Path,
    session: Option<String>,
) -> anyhow::Result<()> {
    let storage = FileStorage::open(client_storage_path(data_dir))?;
    if let Some(session) = session {
        storage.set(SESSION_ID_KEY, &session)?;
    }

    let transport = HttpChatTransport::new(
        &config.client.api_base_url,
        Duration::from_secs(config.server.request_timeout_secs),
    )?;
    let server = transport.base_url().to_string();

    let view = Arc::new(TerminalView::new());
    let controller = ChatController::new(transport, storage, view, &config.client);
    info!(session_id = controller.session_id(), %server, "Chat session started");

    print_welcome_banner(&server, controller.session_id());
    controller.check_server_status().await;
    println!();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                let Some(cmd) = commands::parse(&text) else {
                    send(&controller, &text).await;
                    continue;
                };

                match cmd {
                    ChatCommand::Help => commands::print_help(),
                    ChatCommand::Clear => {
                        if chat_input
                            .confirm("Are you sure you want to clear the whole chat history?")
                            .await
                        {
                            // Failure is already reported through a notification.
                            let _ = controller.clear_history().await;
                        }
                    }
                    ChatCommand::History => print_history(&controller.messages()),
                    ChatCommand::Feature(None) => print_features(),
                    ChatCommand::Feature(Some(name)) => {
                        let prompt = controller.use_feature(&name);
                        println!(
                            "  {} {}",
                            style("Try:").bold(),
                            style(prompt).cyan()
                        );
                    }
                    ChatCommand::Section(None) => {
                        println!(
                            "  {} {}",
                            style("Current section:").bold(),
                            controller.current_section()
                        );
                    }
                    ChatCommand::Section(Some(name)) => match controller.switch_section(&name) {
                        Ok(Section::Features) => print_features(),
                        Ok(Section::About) => print_about(),
                        Ok(Section::Chat) => {}
                        Err(e) => println!("  {} {e}", style("?").yellow().bold()),
                    },
                    ChatCommand::Status => {
                        controller.check_server_status().await;
                    }
                    ChatCommand::Exit => {
                        println!("\n  {}", style("Session ended.").dim());
                        break;
                    }
                    ChatCommand::Unknown(name) => {
                        println!(
                            "\n  {} Unknown command: {}. Type /help for available commands.\n",
                            style("?").yellow().bold(),
                            style(name).dim()
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

async fn send<T: ChatTransport, S: KeyValueStorage>(controller: &ChatController<T, S>, text: &str) {
    match controller.send_message(text).await {
        SendOutcome::Replied(_) => {
            controller.wait_for_reveal().await;
        }
        SendOutcome::Failed(_) => {
            println!(
                "  {}",
                style("Is the server running? Try /status.").dim()
            );
        }
        SendOutcome::Ignored => {}
    }
    println!();
}

fn print_history(messages: &[ChatMessage]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Time").fg(Color::White),
        Cell::new("From").fg(Color::White),
        Cell::new("Message").fg(Color::White),
    ]);

    for message in messages {
        let from = match message.kind {
            MessageKind::User => Cell::new("You").fg(Color::Green),
            MessageKind::Assistant => Cell::new("Ebios").fg(Color::Cyan),
        };
        table.add_row(vec![Cell::new(&message.timestamp), from, Cell::new(&message.content)]);
    }

    println!();
    println!("{table}");
    println!();
}
