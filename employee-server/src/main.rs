use employee_server::{Config, Server, init_logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_logger(&config.log_level, config.log_json)?;

    tracing::info!("Starting employee-server (env: {})", config.environment);

    Server::new(config).run().await?;
    Ok(())
}
