use clap::ArgMatches;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::{GraphQLClient, Transport};
use crate::config::{get_api_url, get_default_path, get_token, load_config};
use crate::error::{ErrorContext, IssuesError, IssuesResult};
use crate::formatting::print_state;
use crate::logging::log_error;
use crate::models::RepositoryPath;
use crate::store::{ApplicationState, FetchOutcome, IssuesController};

/// A line typed at the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    More,
    Open(String),
    Quit,
}

pub fn parse_action(line: &str) -> PromptAction {
    match line.trim() {
        "q" | "quit" | "exit" => PromptAction::Quit,
        "" | "m" | "more" | "y" | "yes" => PromptAction::More,
        other => PromptAction::Open(other.to_string()),
    }
}

pub async fn handle_issues(matches: &ArgMatches) -> IssuesResult<()> {
    let config = load_config()?;
    let token = get_token(&config)?;
    let client = GraphQLClient::with_api_url(&token, &get_api_url(&config))?;

    let path = match matches.get_one::<String>("path") {
        Some(raw) => RepositoryPath::parse(raw)?,
        None => get_default_path(&config)?,
    };
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("text");
    let max_pages = if matches.get_flag("all") {
        None
    } else {
        let pages = match matches.get_one::<String>("pages") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("Invalid --pages value '{}'", raw))?,
            None => 1,
        };
        Some(pages.max(1))
    };

    let controller = IssuesController::new(client, path.clone());

    if matches.get_flag("interactive") {
        if let Err(e) = controller.fetch_initial_path(path).await {
            report_error(&e);
        }
        return run_interactive(&controller, format).await;
    }

    // Whatever was loaded is rendered before a failure is reported
    let (state, loaded) = load_for_display(&controller, path, max_pages).await;
    print_state(&state, format)?;
    loaded.map(|_| ())
}

/// Fetch the first page of `path`, then follow continuation pages up to
/// `max_pages`. The snapshot is returned alongside the outcome so a failed
/// continuation still leaves the earlier pages to show.
pub async fn load_for_display<T: Transport>(
    controller: &IssuesController<T>,
    path: RepositoryPath,
    max_pages: Option<usize>,
) -> (ApplicationState, IssuesResult<usize>) {
    let loaded = match controller.fetch_initial_path(path).await {
        Ok(_) => load_pages(controller, max_pages).await,
        Err(e) => Err(e),
    };
    (controller.state().await, loaded)
}

/// Follow continuation pages until `max_pages` are loaded (or all of them
/// when `None`). Returns the number of pages now in the state.
pub async fn load_pages<T: Transport>(
    controller: &IssuesController<T>,
    max_pages: Option<usize>,
) -> IssuesResult<usize> {
    let mut loaded = 1;
    while controller.has_more().await && max_pages.map_or(true, |max| loaded < max) {
        if controller.fetch_more().await? == FetchOutcome::Stale {
            break;
        }
        loaded += 1;
    }
    Ok(loaded)
}

fn report_error(e: &IssuesError) {
    log_error(&e.to_string());
    if e.is_transport() {
        eprintln!("{} {} (previous results kept)", "Request failed:".red(), e);
    } else {
        eprintln!("{} {}", "Error:".red(), e);
    }
}

async fn run_interactive<T: Transport>(controller: &IssuesController<T>, format: &str) -> IssuesResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_state(&controller.state().await, format)?;

        let hint = if controller.has_more().await {
            "[m]ore (Enter), another org/repo, or [q]uit"
        } else {
            "another org/repo, or [q]uit"
        };
        println!("{} ", hint.dimmed());

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        let result = match parse_action(&line) {
            PromptAction::Quit => return Ok(()),
            PromptAction::More => {
                if !controller.has_more().await {
                    println!("{}", "No more issues to load.".yellow());
                    continue;
                }
                controller.fetch_more().await
            }
            PromptAction::Open(raw) => controller.fetch_initial(&raw).await,
        };

        // Input and transport failures leave the previous state on screen
        if let Err(e) = result {
            report_error(&e);
        }
    }
}
