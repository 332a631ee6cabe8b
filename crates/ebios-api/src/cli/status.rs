//! One-shot client commands: `ebios health` and `ebios clear`.

use std::path::Path;
use std::time::Duration;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use ebios_core::client::storage::{self, KeyValueStorage};
use ebios_core::client::transport::ChatTransport;
use ebios_infra::client::{FileStorage, HttpChatTransport};
use ebios_infra::filesystem::client_storage_path;
use ebios_types::config::GlobalConfig;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Print the server's health report.
pub async fn health(config: &GlobalConfig, json: bool) -> anyhow::Result<()> {
    let transport = HttpChatTransport::new(&config.client.api_base_url, PROBE_TIMEOUT)?;
    let status = transport.health().await.map_err(|e| {
        anyhow::anyhow!("Cannot reach {}: {e}", transport.base_url())
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Server").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("Service").fg(Color::White),
        Cell::new("Version").fg(Color::White),
        Cell::new("Checked").fg(Color::White),
    ]);
    let status_color = if status.is_online() {
        Color::Green
    } else {
        Color::Red
    };
    table.add_row(vec![
        Cell::new(transport.base_url()),
        Cell::new(&status.status).fg(status_color),
        Cell::new(&status.service),
        Cell::new(&status.version),
        Cell::new(&status.timestamp),
    ]);

    println!();
    println!("{table}");
    println!();
    Ok(())
}

/// Forget the stored session on the server and drop its saved history.
pub async fn clear(config: &GlobalConfig, data_dir: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    let storage = FileStorage::open(client_storage_path(data_dir))?;
    let session_id = storage::session_id(&storage);

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to clear the whole chat history?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  {}", style("Cancelled.").dim());
            return Ok(());
        }
    }

    let transport = HttpChatTransport::new(&config.client.api_base_url, PROBE_TIMEOUT)?;
    transport.clear_history(&session_id).await?;
    storage.remove(&storage::history_key(&session_id))?;
    tracing::info!(session_id = %session_id, "Chat history cleared");

    if json {
        println!("{}", serde_json::json!({ "success": true, "sessionId": session_id }));
    } else {
        println!("  {} Chat history cleared", style("✅").bold());
    }
    Ok(())
}
