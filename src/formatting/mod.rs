pub mod issues;
pub mod utils;

pub use issues::{format_state, format_state_json, print_state};
pub use utils::{format_reaction, format_reactions, pluralize, truncate};
