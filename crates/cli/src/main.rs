use clap::Parser;
use std::net::SocketAddr;

use grimoire_server::Config;

#[derive(Parser)]
#[command(name = "grimoire")]
#[command(about = "Read-only REST API for tabletop RPG reference data", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Database file path
    #[arg(short, long, default_value = "grimoire.db")]
    database: String,

    /// Seed the database with sample SRD content on startup
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let database_url = format!("sqlite:{}?mode=rwc", cli.database);

    grimoire_server::run_server(addr, Config::new(database_url), cli.seed).await
}
