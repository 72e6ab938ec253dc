use color_eyre::eyre::Result;
use formrelay::{config, setup_app, setup_tracing, shutdown_signal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = config::new_config()?;
    setup_tracing(settings.base.debug)?;

    let addr = settings.base.address;
    let app = setup_app(&settings)?;
    info!(%addr, "Will use socket address");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
