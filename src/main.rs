use std::sync::{Arc, Mutex};

use tracing::info;
use tracing_subscriber::EnvFilter;

use grimoire::filter::Filter;
use grimoire::settings::Settings;
use grimoire::{load, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::load()?;
    let spellbook = load::spellbook_from_path(&settings.data_file)?;
    let filter = Filter::new(spellbook)?;

    let app = server::router(Arc::new(Mutex::new(filter)));
    let listener = tokio::net::TcpListener::bind(&settings.listen).await?;
    info!(listen = %settings.listen, "grimoire serving");
    axum::serve(listener, app).await?;
    Ok(())
}
