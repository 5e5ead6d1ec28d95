// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod query;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{GraphQLClient, Transport};
pub use config::{get_token, load_config, save_config, Config};
pub use error::{IssuesError, IssuesResult};
pub use models::*;
pub use query::build_query;
pub use store::{ApplicationState, FetchOutcome, IssuesController};
