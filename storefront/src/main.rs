use std::fs::File;

use jwt_simple::prelude::HS256Key;
use store_axum::{router_with_docs, start_server};
use store_sqlite::Db;
use storefront::{AppConfig, Cli, impls::DemoApp};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Every crate in the workspace reports through `tracing`; RUST_LOG picks
    // what reaches stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args and extract the JWT key
    let cli = Cli::import()?;
    let key = HS256Key::from_bytes(cli.secret.as_bytes());

    let AppConfig { server, database } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;
    tracing::info!(
        database = ?database.database_path,
        bind_address = %server.bind_address,
        "product catalog opened"
    );
    let app = DemoApp { db, key };

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, schema) = router_with_docs(app, server);
        serde_json::to_writer_pretty(File::create(path)?, &*schema)?;
        return Ok(());
    }

    start_server(server, app).await?;
    Ok(())
}
