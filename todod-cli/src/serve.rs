//! HTTP server command
//!
//! Resolves configuration, opens the pool, prepares the schema, and runs
//! the server until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use todod_server::db::{self, create_pool};
use todod_server::http::{run_server, ServerConfig};
use todod_server::render::RenderClient;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Database URL (e.g. sqlite://todo.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Render API key for the /services passthrough
    #[arg(long, env = "RENDER_API_KEY", hide_env_values = true)]
    pub render_api_key: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to open database")?;

    db::migrations::run(&pool)
        .await
        .context("Failed to prepare schema")?;

    let render = RenderClient::new(args.render_api_key);
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    tracing::info!("Starting todod on {}", args.bind);

    run_server(pool, render, config)
        .await
        .context("Server error")?;

    Ok(())
}
