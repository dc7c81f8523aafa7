use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    service::{ayah::cache::AyahCache, ramadan::cache::RamadanStartCache},
};

/// Install the global tracing subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the Aladhan client with the configured base URL, user agent and request timeout
pub fn build_aladhan_client(config: &Config) -> Result<aladhan::Client, Error> {
    let aladhan_client = aladhan::Client::builder()
        .base_url(&config.aladhan_url)
        .user_agent(&config.user_agent)
        .timeout(config.http_timeout)
        .build()?;

    Ok(aladhan_client)
}

/// Build the Al-Quran Cloud client with the configured base URL, user agent and request timeout
pub fn build_quran_client(config: &Config) -> Result<alquran::Client, Error> {
    let quran_client = alquran::Client::builder()
        .base_url(&config.quran_url)
        .user_agent(&config.user_agent)
        .timeout(config.http_timeout)
        .build()?;

    Ok(quran_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Assemble the shared application state
pub fn build_app_state(
    config: &Config,
    db: DatabaseConnection,
    aladhan_client: aladhan::Client,
    quran_client: alquran::Client,
) -> AppState {
    AppState {
        db,
        aladhan_client,
        quran_client,
        ramadan_start_cache: RamadanStartCache::new(config.ramadan_cache_capacity),
        ayah_cache: AyahCache::default(),
        tracker_fetch_timeout: config.tracker_fetch_timeout,
    }
}
