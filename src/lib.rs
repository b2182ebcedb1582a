//! Recipe Browser core
//!
//! The stateful half of the recipe-browsing application: a session store with
//! SQLite-backed persistence and a typed client for the remote recipe catalog.
//! Rendering and routing live in the frontend; this crate only owns identity,
//! favorites and catalog access.

pub mod config;
pub mod db;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod reviews;
pub mod session;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use config::Config;
pub use db::{init_database, Repository};
pub use errors::AppError;
pub use gateway::RecipeGateway;
pub use reviews::ReviewBoard;
pub use session::SessionStore;

/// Initialize logging for embedding applications.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
