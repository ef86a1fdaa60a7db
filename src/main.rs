use crate::cli::Args;
use clap::Parser;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;

mod app_context;
mod area_codes;
mod auth;
mod cli;
mod clock;
mod geo;
mod health;
mod http;
mod listings;
mod logging;
mod messaging;
mod reviews;
mod shipping;
mod storage;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);
    auth::init(&args);

    let app_context = app_context::init();
    if let Some(seed_path) = &args.seed {
        listings::seed::load(seed_path, &app_context.market).await;
    }

    tokio::spawn(listings::sweep::run(
        app_context.market.clone(),
        Duration::from_secs(args.sweep_interval_secs),
    ));

    let router = http::router::new(&args, app_context);
    let listener = TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server crashed.");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler.");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler.")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down."),
        _ = terminate => tracing::info!("Received terminate signal, shutting down."),
    }
}
