//! Tally Server entry point.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use tally_server::AppState;
use tally_server::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Sink first: everything constructed after this logs through it.
    let _guard = match tally_server::logging::init(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("unable to open log file {}: {err}", config.log_file);
            std::process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %config.log_file,
        "Tally Server starting",
    );

    let state = AppState::new();
    let app = tally_server::router(state);

    let addr = SocketAddr::new(config.host.parse().expect("invalid host"), config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "Tally Server ready");

    // Drain in-flight requests after the signal, but only within the grace
    // period; overrunning requests are abandoned with a warning.
    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = drain_tx.send(());
        })
        .into_future();

    let grace = Duration::from_secs(config.shutdown_grace);
    tokio::select! {
        res = server => res.expect("server error"),
        () = async {
            let _ = drain_rx.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_secs = config.shutdown_grace,
                "grace period expired with requests still in flight",
            );
        }
    }

    tracing::info!("Tally Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
