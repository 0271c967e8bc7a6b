use shopstock_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let db_path = std::env::var("SHOP_DB_PATH").unwrap_or_else(|_| "./shop.db".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // A failure to open the store or create the schema is fatal to startup.
    let db = match Database::new(DbConfig::new(&db_path)).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, path = %db_path, "failed to open database");
            std::process::exit(1);
        }
    };

    let app = inventory_api::app::build_app(db);

    let addr = format!("0.0.0.0:{port}");
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, addr = %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
