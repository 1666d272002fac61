use tracing::{error, info};

use eck_client::config::{LogFormat, WRITE_USER_ROLE_MAPPING};
use eck_client::logging::init_tracing;
use eck_client::{global, AppError, Dependencies, Settings};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if let Err(e) = init_tracing(LogFormat::from_env()) {
        eprintln!("Failed to initialize tracing: {}", e);
    }

    if let Err(e) = run().await {
        error!(error = %e, "ECK client failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    let deps = Dependencies::new(settings)?;
    let client = global::init(deps.client)?;

    // Outcomes are reported through the response observer; log and continue.
    let _ = client.info().await;
    if deps.mock.is_some() {
        let _ = client.get_role_mapping(WRITE_USER_ROLE_MAPPING).await;
    }

    info!("ECK client finished");
    Ok(())
}
