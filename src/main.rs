use clap::Parser;
use recommender::{
    api::{create_router, AppState},
    catalog::Catalog,
    cli::{commands, Cli, Commands},
    config::Settings,
    ranker::RankerIndex,
    Error, Result,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recommender=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::from_env()?;
    if let Some(path) = cli.catalog {
        settings.catalog.path = path;
    }
    settings.validate()?;

    // The index is built exactly once; every command reads the same one
    let catalog = Catalog::load(&settings.catalog.path)?;
    let index = RankerIndex::build(catalog, settings.ranker.max_vocab_size);

    match cli.command {
        Commands::Recommend {
            ingredients,
            limit,
            exclude,
        } => {
            commands::recommend(&index, &settings, &ingredients, limit, exclude)?;
        }
        Commands::Validate => {
            commands::validate_catalog(&index)?;
        }
        Commands::Serve { port, host } => {
            serve(settings, index, port, host).await?;
        }
    }

    Ok(())
}

async fn serve(
    mut settings: Settings,
    index: RankerIndex,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting recipe recommendation server");
    info!("Catalog: {}", settings.catalog.path.display());
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    let state = AppState {
        index: Arc::new(index),
        settings: settings.clone(),
    };
    let app = create_router(state, &settings)?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Recipe Recommender");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("\nAPI Endpoints:");
    println!("  GET  /api/recommend?q=<ingredients>&limit=<n>&exclude=<allergens>");
    println!("  GET  /api/allergens");
    println!("  GET  /api/stats");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
