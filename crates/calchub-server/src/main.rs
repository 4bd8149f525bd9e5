use std::env;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "calchub=debug,info".to_string()))
        .with_target(false)
        .init();

    // Environment-based configuration
    let host = env::var("CALCHUB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("CALCHUB_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let app = calchub_server::create_app();
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "calchub server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
