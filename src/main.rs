use ramadan_tracker::server::{config::Config, error::Error, router, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let aladhan_client = startup::build_aladhan_client(&config)?;
    let quran_client = startup::build_quran_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_app_state(&config, db, aladhan_client, quran_client);

    let app = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
