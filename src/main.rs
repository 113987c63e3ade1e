use axum::ServiceExt;
use clap::Parser;
use epic_notes::logger::Logger;
use epic_notes::settings::{parse_settings, Cli};
use epic_notes::state::State;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new_bootstrap();

    let settings = parse_settings(cli.settings.as_deref())?;
    tracing::info!(?settings);
    logger.reload_filter(&settings.log)?;

    let state = Arc::new(State::try_from_settings(&settings)?);
    let app = epic_notes::routes::app(state);

    let address: std::net::SocketAddr = settings.http.address.parse()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "serving epic notes");

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .with_graceful_shutdown(async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Error listening for shutdown signal: {err}");
        }
    })
    .await?;

    tracing::info!("server shut down");
    Ok(())
}
