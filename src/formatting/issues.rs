use std::fmt::Write;

use colored::*;

use crate::constants::TITLE;
use crate::error::IssuesResult;
use crate::models::{Organization, Repository};
use crate::store::ApplicationState;

use super::utils::*;

const TITLE_WIDTH: usize = 80;

/// Render a state snapshot as terminal text.
///
/// GraphQL errors take precedence over whatever partial data came with them.
pub fn format_state(state: &ApplicationState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE.bold());
    let _ = writeln!(out, "Show open issues for https://github.com/{}", state.path.to_string().cyan());
    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());

    if let Some(errors) = &state.errors {
        let _ = writeln!(out, "{} {}", "Something went wrong:".red().bold(), errors.join(" "));
        return out;
    }

    match &state.organization {
        Some(organization) => write_organization(&mut out, organization),
        None => {
            let _ = writeln!(out, "{}", "No organization found".dimmed());
        }
    }

    out
}

pub fn format_state_json(state: &ApplicationState) -> IssuesResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn print_state(state: &ApplicationState, format: &str) -> IssuesResult<()> {
    match format {
        "json" => println!("{}", format_state_json(state)?),
        _ => print!("{}", format_state(state)),
    }
    Ok(())
}

fn write_organization(out: &mut String, organization: &Organization) {
    let name = organization.name.as_deref().unwrap_or("(unnamed)");
    let _ = writeln!(
        out,
        "{} {} ({})",
        "Issues from Organization:".bold(),
        name.blue(),
        organization.url.dimmed()
    );

    match &organization.repository {
        Some(repository) => write_repository(out, repository),
        None => {
            let _ = writeln!(out, "{}", "No repository found".dimmed());
        }
    }
}

fn write_repository(out: &mut String, repository: &Repository) {
    let _ = writeln!(
        out,
        "{} {} ({})",
        "In Repository:".bold(),
        repository.name.blue(),
        repository.url.dimmed()
    );
    let _ = writeln!(out);

    let issues = &repository.issues;
    if issues.edges.is_empty() {
        let _ = writeln!(out, "{}", "No open issues.".dimmed());
    }

    for issue in issues.issues() {
        let _ = writeln!(out, "• {}", truncate(&issue.title, TITLE_WIDTH));
        let _ = writeln!(out, "  {}", issue.url.dimmed());
        if let Some(reactions) = format_reactions(issue) {
            let _ = writeln!(out, "  {}", reactions);
        }
    }

    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    let _ = writeln!(
        out,
        "Showing {} of {}",
        issues.edges.len(),
        pluralize(issues.total_count, "open issue", "open issues")
    );
    if issues.page_info.has_next_page {
        let _ = writeln!(out, "{}", "More issues available".yellow());
    }
}
