//! Clap derive structures for the `homegate` CLI.
//!
//! Defines the command tree, global flags, and shared enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// homegate -- control a home router from the command line
#[derive(Debug, Parser)]
#[command(
    name = "homegate",
    version,
    about = "Control a home router's web admin interface from the command line",
    long_about = "Scrapes the router's admin pages for DHCP leases and associated\n\
        Wi-Fi stations, and drives its device-blocking and time-of-day\n\
        restriction endpoints. Credentials and device aliases live in a\n\
        local config file.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Router gateway address (overrides the config file)
    #[arg(long, short = 'g', env = "HOMEGATE_GATEWAY", global = true)]
    pub gateway: Option<String>,

    /// Router admin username (overrides the config file)
    #[arg(long, short = 'u', env = "HOMEGATE_USERNAME", global = true)]
    pub username: Option<String>,

    /// Router admin password (overrides the config file)
    #[arg(long, env = "HOMEGATE_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the DHCP lease table
    #[command(alias = "dhcp")]
    Leases,

    /// Show MAC addresses of associated Wi-Fi stations
    #[command(alias = "st")]
    Stations,

    /// Show associated stations annotated with their aliases
    #[command(alias = "dev")]
    Devices,

    /// Show MAC addresses currently on the wireless filter list
    Blocked,

    /// Reboot the router
    Reboot,

    /// Block a device (by MAC address or alias)
    Block {
        /// MAC address or recorded alias
        target: String,
    },

    /// Unblock a device (by MAC address or alias)
    Unblock {
        /// MAC address or recorded alias
        target: String,
    },

    /// Restrict a device's access to a time-of-day window
    Limit(LimitArgs),

    /// Manage device aliases
    Alias(AliasArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LIMIT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LimitArgs {
    /// Device MAC address or recorded alias
    #[arg(long, required = true)]
    pub mac: String,

    /// Profile name recorded on the router
    #[arg(long, default_value = "User_1")]
    pub user: String,

    /// Day or two-day range: Mon..Sun or Everyday (e.g. "Mon", "Mon-Fri")
    #[arg(long, default_value = "Everyday")]
    pub days: String,

    /// Window start, 24-hour H or H:MM
    #[arg(long, required = true)]
    pub start: String,

    /// Window end, 24-hour H or H:MM
    #[arg(long, required = true)]
    pub end: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ALIAS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AliasArgs {
    #[command(subcommand)]
    pub command: AliasCommand,
}

#[derive(Debug, Subcommand)]
pub enum AliasCommand {
    /// Bind a nickname to a device's MAC address
    Set {
        /// Device MAC address
        mac: String,

        /// Nickname to record
        name: String,
    },

    /// Bind nicknames from parallel comma-separated lists
    Import {
        /// MAC addresses (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        macs: Vec<String>,

        /// Nicknames (comma-separated, paired with --macs by position)
        #[arg(long, value_delimiter = ',', required = true)]
        names: Vec<String>,
    },

    /// List recorded aliases
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display the current configuration (password masked)
    Show,

    /// Print the config file path
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
