use anyhow::Context;
use tokio::net::TcpListener;

use mondict::config::AppConfig;
use mondict::handlers::{self, AppState};
use mondict::{Dictionary, SeedImporter, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    log::debug!("Loaded configuration: {:?}", config);

    // Store: the app cannot run without it
    let pool = db::open_store(
        &config.database_path,
        config.template_db_path.as_deref(),
        config.pool_size,
    )
    .with_context(|| {
        format!(
            "Failed to open dictionary store at {}",
            config.database_path.display()
        )
    })?;
    let dictionary = Dictionary::new(pool);

    // Seed import runs in the background; the API serves whatever is there meanwhile
    let import = SeedImporter::new(
        &config.seed_dir,
        config.seed_prefix.as_str(),
        config.import_batch_size,
    )
    .spawn(dictionary.clone());
    tokio::spawn(async move {
        match import.await {
            Ok(Ok(report)) => log::info!("Seed import complete: {:?}", report),
            Ok(Err(e)) => log::error!("Seed import failed: {}", e),
            Err(e) => log::error!("Seed import task panicked: {}", e),
        }
    });

    let app = handlers::build_router(AppState::new(dictionary, &config));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_addr))?;

    log::info!("Dictionary API running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
