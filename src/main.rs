use std::process;

use clap::{Arg, Command};

use github_issues_cli::commands::{handle_auth, handle_issues};
use github_issues_cli::logging::{init_logging, log_error, log_panic_info};

#[tokio::main]
async fn main() {
    let app = Command::new("gh-issues")
        .about("Browse open GitHub issues and their reactions from the command line")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .global(true)
                .action(clap::ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("auth")
                .about("Configure the GitHub token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Save a GitHub personal access token")
                        .required(false)
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured token (masked)")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("issues")
                .about("List open issues of a repository, newest page first")
                .arg(
                    Arg::new("path")
                        .value_name("ORG/REPO")
                        .help("Repository path, e.g. facebook/react")
                        .index(1)
                )
                .arg(
                    Arg::new("pages")
                        .long("pages")
                        .short('p')
                        .value_name("NUMBER")
                        .help("Number of pages of five issues to load")
                        .default_value("1")
                        .conflicts_with("all")
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Keep loading until the last page")
                        .action(clap::ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("interactive")
                        .long("interactive")
                        .short('i')
                        .help("Prompt for more pages or another repository")
                        .action(clap::ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text")
                )
        );

    let matches = app.get_matches();

    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    if let Err(e) = init_logging() {
        eprintln!("Warning: file logging disabled: {}", e);
    }
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches),
        Some(("issues", sub_matches)) => handle_issues(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'gh-issues --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
