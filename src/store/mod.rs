pub mod controller;
pub mod state;

pub use controller::{FetchOutcome, IssuesController};
pub use state::ApplicationState;
