use clap::ArgMatches;

use crate::config::{load_config, save_config};
use crate::error::IssuesResult;

pub fn handle_auth(matches: &ArgMatches) -> IssuesResult<()> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut config = load_config()?;
        config.token = Some(token.trim().to_string());
        save_config(&config)?;
        println!("Token saved successfully!");
    } else if matches.get_flag("show") {
        let config = load_config()?;
        match config.token {
            Some(token) => println!("Token: {}", mask_token(&token)),
            None => println!("No token configured"),
        }
    } else {
        println!("Usage: gh-issues auth --token <TOKEN> or gh-issues auth --show");
    }
    Ok(())
}

/// Keep only the first and last four characters of a token visible.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("ghp_1234567890abcd"), "ghp_...abcd");
        assert_eq!(mask_token("short"), "*****");
    }
}
