/// Roster Server - user record service over MongoDB
use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_core::UserStore;
use roster_server::{
    config::ServerConfig,
    create_router,
    state::{with_deadline, AppState},
    store,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "HTTP service for user records stored in MongoDB", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Print every stored record as one JSON line
    ListUsers,
    /// Check that MongoDB is reachable
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::ListUsers => list_users(config).await,
        Commands::Ping => ping(config).await,
    };

    if let Err(ref e) = result {
        tracing::error!("{:#}", e);
    }
    result
}

async fn connect(config: &ServerConfig) -> anyhow::Result<Arc<dyn UserStore>> {
    tracing::info!(
        "Connecting to MongoDB ({}.{})",
        config.storage.database,
        config.storage.collection
    );

    let store = store::connect(&config.storage, config.timeouts.connect())
        .await
        .context("Could not connect to MongoDB")?;

    tracing::info!("MongoDB connection established");
    Ok(Arc::new(store))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = connect(&config).await?;

    // Build application state
    let app_state = AppState::new(store, config.timeouts.request());

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("Invalid host address: {}", config.server.host))?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let store = connect(&config).await?;

    let users = with_deadline(config.timeouts.request(), store.list_users())
        .await
        .context("Could not list users")?;

    for user in users {
        println!("{}", serde_json::to_string(&user)?);
    }

    Ok(())
}

async fn ping(config: ServerConfig) -> anyhow::Result<()> {
    connect(&config).await?;
    println!("ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
