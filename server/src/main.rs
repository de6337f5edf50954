use clap::Parser;
use log::{error, info};
use server::api::Api;
use server::network::Server;
use server::seed;
use server::store::RecordStore;
use shared::{Disclosure, DEFAULT_PORT};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Main-method of the application.
/// Parses command-line arguments, loads the seed records and serves the quiz API.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Server IP address to bind to
        #[clap(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Server port to listen on
        #[clap(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Start without the demo players (questions are always loaded)
        #[clap(long)]
        empty: bool,
    }

    env_logger::init();

    let args = Args::parse();

    let store = if args.empty {
        RecordStore::new(Vec::new(), seed::questions())?
    } else {
        RecordStore::seeded()?
    };
    info!(
        "Loaded {} players and {} questions",
        store.len(),
        store.questions().len()
    );

    let api = Api::new(Arc::new(RwLock::new(store)), Disclosure::Full);
    let address = format!("{}:{}", args.host, args.port);
    let server = Server::bind(&address, api)?;
    let shutdown = server.shutdown_handle();

    let mut server_handle = tokio::spawn(server.run());

    // Handle shutdown gracefully
    tokio::select! {
        result = &mut server_handle => {
            match result {
                Ok(Err(e)) => error!("Server stopped: {}", e),
                Err(e) => error!("Server task panicked: {}", e),
                Ok(Ok(())) => {}
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
            shutdown.shutdown().await;
            if let Err(e) = server_handle.await {
                error!("Server task panicked: {}", e);
            }
        }
    }

    Ok(())
}
