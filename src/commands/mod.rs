pub mod auth;
pub mod issues;

pub use auth::handle_auth;
pub use issues::handle_issues;
