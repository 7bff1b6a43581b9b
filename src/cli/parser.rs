use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for locapture
/// CLI application to capture and list device positions with SQLite
#[derive(Parser)]
#[command(
    name = "locapture",
    version = env!("CARGO_PKG_VERSION"),
    about = "Capture the current position, keep it in SQLite and list what was captured",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override preferences file path
    #[arg(global = true, long = "prefs")]
    pub prefs: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Capture the current position and store it
    Capture {
        /// Latitude to record instead of reading the position file
        #[arg(long = "lat", requires = "lon", allow_hyphen_values = true)]
        lat: Option<String>,

        /// Longitude to record instead of reading the position file
        #[arg(long = "lon", requires = "lat", allow_hyphen_values = true)]
        lon: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Grant location permission without asking")]
        yes: bool,
    },

    /// List captured positions, newest first
    List {
        #[arg(long = "json", help = "Print the list as JSON")]
        json: bool,
    },

    /// Show or change the light/dark theme preference
    #[command(group(ArgGroup::new("mode").args(["toggle", "dark", "light"])))]
    Theme {
        #[arg(long = "toggle", help = "Switch between light and dark")]
        toggle: bool,

        #[arg(long = "dark", help = "Use the dark theme")]
        dark: bool,

        #[arg(long = "light", help = "Use the light theme")]
        light: bool,
    },
}
