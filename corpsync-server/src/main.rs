//! `CorpSync` Auth Server -- stateless login and session verification.
//!
//! Reads a JSON credential file, verifies email/password pairs against
//! bcrypt hashes, and issues signed 24-hour session tokens. All other
//! dashboard state is client-side; this binary only proves identity.
//!
//! # Usage
//!
//! ```bash
//! # Initialize the credential file once
//! cargo run --bin corpsync-init-db
//!
//! # Run on the default address 0.0.0.0:5000
//! CORPSYNC_JWT_SECRET=change-me cargo run --bin corpsync-server
//!
//! # Run on a custom address with a custom credential file
//! CORPSYNC_JWT_SECRET=change-me cargo run --bin corpsync-server -- \
//!     --bind 127.0.0.1:8080 --credentials /var/lib/corpsync/db.json
//! ```

use std::sync::Arc;

use clap::Parser;
use corpsync_server::config::{CliArgs, ServerConfig};
use corpsync_server::credentials::CredentialStore;
use corpsync_server::server::{self, AppState};
use corpsync_server::session::SessionIssuer;

#[tokio::main]
async fn main() {
    let cli = CliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    // A missing signing secret fails here, before anything listens.
    let config = match ServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, db = %config.credentials_path.display(), "starting corpsync auth server");

    let state = Arc::new(AppState {
        credentials: CredentialStore::new(&config.credentials_path),
        sessions: SessionIssuer::new(&config.jwt_secret),
    });

    match server::start_server(&config.bind_addr, state).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "auth server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "auth server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start auth server");
            std::process::exit(1);
        }
    }
}
