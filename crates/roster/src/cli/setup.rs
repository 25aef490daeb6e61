use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rosterapp::api::PageNav;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version,
    disable_help_subcommand = true,
    after_help = "Enable shell completions:\n  eval \"$(roster completions bash)\"  # add to ~/.bashrc\n  eval \"$(roster completions zsh)\"   # add to ~/.zshrc"
)]
#[command(about = "Browse and edit a remote user directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Users collection to talk to (overrides roster.toml)
    #[arg(
        long,
        global = true,
        env = "ROSTER_BASE_URL",
        value_name = "URL",
        help_heading = "Options"
    )]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users, twelve per page
    #[command(alias = "ls")]
    List {
        /// Page to show: first, prev, next, last or a page number
        #[arg(short, long, default_value = "first", value_name = "PAGE")]
        page: PageNav,
    },

    /// Show one user, optionally saving edits in place
    #[command(alias = "v")]
    View {
        /// User id
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New avatar URL (empty to clear)
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Create a new user
    #[command(alias = "n")]
    Create {
        /// Name (multiple words are joined)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Edit a user from the list
    #[command(alias = "e")]
    Edit {
        /// User id
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New avatar URL (empty to clear)
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Page through users interactively (n, p, f, l, a page number, q)
    Browse,

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn build_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_parses_page_requests() {
        let cli = Cli::try_parse_from(["roster", "ls", "--page", "last"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                page: PageNav::Last
            })
        ));

        let cli = Cli::try_parse_from(["roster", "list", "-p", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                page: PageNav::Page(3)
            })
        ));

        assert!(Cli::try_parse_from(["roster", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn create_joins_name_words() {
        let cli = Cli::try_parse_from(["roster", "create", "Ada", "Lovelace", "--avatar", "x"])
            .unwrap();
        match cli.command {
            Some(Commands::Create { name, avatar }) => {
                assert_eq!(name.join(" "), "Ada Lovelace");
                assert_eq!(avatar.as_deref(), Some("x"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "roster",
            "view",
            "7",
            "--base-url",
            "http://localhost:1/users",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1/users"));
        assert!(cli.no_color);
    }

    #[test]
    fn command_definition_is_consistent() {
        build_command().debug_assert();
    }
}
