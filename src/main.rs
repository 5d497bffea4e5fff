use configprop_server::{shared::LoggingUtils, HttpServer, Settings};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Settings come first: they decide how logging is set up
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = LoggingUtils::initialize(&settings.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting configuration service...");

    let server = match HttpServer::new(settings) {
        Ok(server) => {
            info!("Configuration validated successfully");
            server
        }
        Err(e) => {
            error!("Refusing to start: {}", e);
            std::process::exit(1);
        }
    };

    info!("Server starting on {}", server.settings().server_address());

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
