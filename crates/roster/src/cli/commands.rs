//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build the `RosterApi` from configuration
//! 3. **API Dispatch**: Call the appropriate `RosterApi` methods
//! 4. **Output Formatting**: Render the resulting screen
//! 5. **Error Handling**: Turn error states into an `Err`, which `main` reports and exits on

use super::render::{print_messages, render_detail, render_list, render_modal};
use super::setup::{build_command, Cli, Commands};
use anyhow::{bail, Result};
use clap::Parser;
use clap_complete::Shell;
use rosterapp::api::{CmdResult, MessageLevel, PageNav, RosterApi};
use rosterapp::backend::UserBackend;
use rosterapp::init::initialize;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const BROWSE_PROMPT: &str = "[n]ext [p]rev [f]irst [l]ast, a page number, or [q]uit > ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // Naked `roster` shows the first page
    let command = cli.command.unwrap_or(Commands::List {
        page: PageNav::First,
    });

    if let Commands::Completions { shell } = command {
        return handle_completions(shell);
    }

    let ctx = initialize(cli.base_url)?;
    debug!(base_url = %ctx.config.base_url, "context ready");
    let mut api = ctx.api;

    match command {
        Commands::List { page } => handle_list(&mut api, page),
        Commands::View { id, name, avatar } => handle_view(&mut api, &id, name, avatar),
        Commands::Create { name, avatar } => handle_create(&mut api, name.join(" "), avatar),
        Commands::Edit { id, name, avatar } => handle_edit(&mut api, &id, name, avatar),
        Commands::Browse => handle_browse(&mut api),
        Commands::Completions { .. } => Ok(()),
    }
}

/// `warn` by default; `RUST_LOG` is honored and `--verbose` raises roster's own crates to
/// `debug` on top of it.
fn init_tracing(verbose: bool) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    if verbose {
        for directive in ["rosterapp=debug", "roster=debug"] {
            if let Ok(directive) = directive.parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Fails with the first error message of a command, if there is one.
fn ensure_ok(result: &CmdResult) -> Result<()> {
    match result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        Some(message) => bail!("{}", message.content),
        None => Ok(()),
    }
}

fn load_list<B: UserBackend>(api: &mut RosterApi<B>) -> Result<()> {
    let result = api.load_users()?;
    if result.has_errors() {
        print!("{}", render_list(api.list_screen()));
    }
    ensure_ok(&result)
}

fn handle_list<B: UserBackend>(api: &mut RosterApi<B>, page: PageNav) -> Result<()> {
    load_list(api)?;
    api.navigate(page);
    print!("{}", render_list(api.list_screen()));
    Ok(())
}

fn handle_view<B: UserBackend>(
    api: &mut RosterApi<B>,
    id: &str,
    name: Option<String>,
    avatar: Option<String>,
) -> Result<()> {
    let result = api.show_user(id)?;
    if result.has_errors() || (name.is_none() && avatar.is_none()) {
        print!("{}", render_detail(api.detail_screen()));
        return ensure_ok(&result);
    }

    api.edit_details(name, avatar);
    let saved = api.save_details()?;
    print!("{}", render_detail(api.detail_screen()));
    ensure_ok(&saved)
}

fn handle_create<B: UserBackend>(
    api: &mut RosterApi<B>,
    name: String,
    avatar: Option<String>,
) -> Result<()> {
    load_list(api)?;
    api.open_create()?;
    api.fill_form(Some(name), avatar)?;
    submit_form(api)
}

fn handle_edit<B: UserBackend>(
    api: &mut RosterApi<B>,
    id: &str,
    name: Option<String>,
    avatar: Option<String>,
) -> Result<()> {
    load_list(api)?;
    api.open_edit(id)?;
    api.fill_form(name, avatar)?;
    submit_form(api)
}

/// Submits the open form. A rejected or failed submit shows the form with its error.
fn submit_form<B: UserBackend>(api: &mut RosterApi<B>) -> Result<()> {
    let result = api.submit_form()?;
    if result.has_errors() {
        if let Some(modal) = api.list_screen().modal() {
            print!("{}", render_modal(modal));
        }
        return ensure_ok(&result);
    }

    print_messages(&result.messages);
    println!();
    print!("{}", render_list(api.list_screen()));
    Ok(())
}

fn handle_browse<B: UserBackend>(api: &mut RosterApi<B>) -> Result<()> {
    load_list(api)?;
    print!("{}", render_list(api.list_screen()));

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("{}", BROWSE_PROMPT);
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let command = input.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command, "q" | "quit") {
            break;
        }

        match command.parse::<PageNav>() {
            Ok(nav) => {
                if api.navigate(nav) {
                    println!();
                    print!("{}", render_list(api.list_screen()));
                }
            }
            Err(_) => eprintln!("Unknown input: {}", command),
        }
    }
    Ok(())
}

fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = build_command();
    clap_complete::generate(shell, &mut cmd, "roster", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterapp::backend::memory::{BackendCall, MemBackend};

    fn api(count: u64) -> RosterApi<MemBackend> {
        RosterApi::new(MemBackend::seeded(count))
    }

    #[test]
    fn list_fails_when_the_load_fails() {
        let mut api = api(3);
        api.backend().set_fail_requests(true);
        let err = handle_list(&mut api, PageNav::First).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load users");
    }

    #[test]
    fn create_sends_one_request() {
        let mut api = api(3);
        handle_create(&mut api, "Ada Lovelace".into(), None).unwrap();
        assert_eq!(
            api.backend().calls(),
            vec![BackendCall::List, BackendCall::Create("Ada Lovelace".into())]
        );
        assert_eq!(api.list_screen().users()[0].name, "Ada Lovelace");
    }

    #[test]
    fn blank_create_is_rejected_without_a_request() {
        let mut api = api(3);
        let err = handle_create(&mut api, "   ".into(), None).unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
        assert_eq!(api.backend().calls(), vec![BackendCall::List]);
    }

    #[test]
    fn edit_of_an_unknown_user_fails() {
        let mut api = api(3);
        assert!(handle_edit(&mut api, "42", Some("X".into()), None).is_err());
        assert_eq!(api.backend().call_count(), 1);
    }

    #[test]
    fn view_without_edits_does_not_save() {
        let mut api = api(3);
        handle_view(&mut api, "2", None, None).unwrap();
        assert_eq!(api.backend().calls(), vec![BackendCall::Get("2".parse().unwrap())]);
    }

    #[test]
    fn view_with_edits_saves_in_place() {
        let mut api = api(3);
        handle_view(&mut api, "2", Some("Bea".into()), None).unwrap();
        assert_eq!(api.backend().users()[1].name, "Bea");
        assert_eq!(api.backend().call_count(), 2);
    }

    #[test]
    fn view_of_a_missing_user_fails_after_rendering() {
        let mut api = api(1);
        let err = handle_view(&mut api, "9", None, None).unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }
}
