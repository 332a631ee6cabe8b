//! `ebios serve`: run the REST API.

use console::style;

use ebios_types::config::GlobalConfig;

use crate::http::router::build_router;
use crate::state::AppState;

pub async fn run(config: &GlobalConfig) -> anyhow::Result<()> {
    let state = AppState::init(config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        %addr,
        model = %config.server.model,
        provider = state.chat_service.adapter().provider_name(),
        "Server listening"
    );
    println!(
        "  {} Ebios AI listening on {}",
        style("⚡").bold(),
        style(format!("http://{addr}")).cyan()
    );
    if let Some(dir) = &state.public_dir {
        println!("  {}", style(format!("Serving {}", dir.display())).dim());
    }
    println!("  {}", style("Press Ctrl+C to stop").dim());

    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// If a handler cannot be installed, that signal is simply never awaited.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
