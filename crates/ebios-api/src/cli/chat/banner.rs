//! Welcome banner and static section screens.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use ebios_core::client::features::FEATURE_CARDS;

pub fn print_welcome_banner(server: &str, session_id: &str) {
    println!();
    println!("  🤖 {}", style("Ebios AI 1.5").cyan().bold());
    println!("  {}", style("The AI assistant of Ebios Game Studio").dim());
    println!();
    println!("  {}  {}", style("Server:").bold(), style(server).dim());
    println!("  {}  {}", style("Session:").bold(), style(session_id).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}

/// The features section: one row per card.
pub fn print_features() {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("").fg(Color::White),
        Cell::new("Feature").fg(Color::White),
        Cell::new("What it helps with").fg(Color::White),
    ]);
    for card in FEATURE_CARDS {
        table.add_row(vec![
            Cell::new(card.icon),
            Cell::new(card.title).fg(Color::Cyan),
            Cell::new(card.description),
        ]);
    }

    println!();
    println!("{table}");
    println!("  {}", style("Use /feature <name> to start from a prompt").dim());
    println!();
}

pub fn print_about() {
    println!();
    println!("  {}", style("About Ebios AI").bold());
    println!();
    println!("  Ebios AI 1.5 is the assistant of Ebios Game Studio. It answers questions");
    println!("  about technology, games, programming and study, and helps you find your");
    println!("  way around the studio's site.");
    println!();
}
