//! Clap derive structures for the `repack` console.
//!
//! Defines the command tree, global flags, and shared value types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// repack -- operator console for the packet-repackage gateway
#[derive(Debug, Parser)]
#[command(
    name = "repack",
    version,
    about = "Configure a packet-repackage gateway from the terminal",
    long_about = "Talks to the gateway's configuration backend over HTTP.\n\n\
        `repack open <path>` navigates the console the same way the web UI\n\
        does; the resource subcommands call the backend directly.",
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
    /// Backend base URL (absolute, or a path resolved against VITE_API_TARGET)
    #[arg(long, short = 'b', global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "REPACK_OUTPUT",
        default_value = "table",
        global = true
    )]
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
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// One identifier per line, for piping
    Plain,
}

// ── Command Tree ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Navigate to a console path and load its view
    Open(OpenArgs),

    /// Show the console route table
    Routes,

    /// Interfaces, VLANs and link state
    #[command(alias = "net")]
    Network(NetworkArgs),

    /// Manage packet fields
    Fields(FieldsArgs),

    /// Manage repackaging rules
    Rules(RulesArgs),

    /// Manage nftables rules
    #[command(alias = "nft")]
    Nftrules(NftRulesArgs),

    /// Dry-run a packet through the rule engine
    Test(TestArgs),

    /// Inspect and clear processing logs
    Logs(LogsArgs),

    /// Show the resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// --- Open ---

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Console paths, e.g. `/`, `/rules`, `/logs`; visited in order and
    /// the last one is shown
    #[arg(default_value = "/", num_args = 1..)]
    pub paths: Vec<String>,

    /// Return to the page visited before the last path
    #[arg(long)]
    pub back: bool,
}

// --- Network ---

#[derive(Debug, Args)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub command: NetworkCommand,
}

#[derive(Debug, Subcommand)]
pub enum NetworkCommand {
    /// List network interfaces
    #[command(alias = "ls")]
    Interfaces,

    /// Show one interface
    Interface {
        /// Interface name (e.g. eth0)
        name: String,
    },

    /// Show the VLAN configuration of an interface
    Vlan {
        /// Interface name
        name: String,
    },

    /// Set an interface's VLAN mode
    ConfigureVlan {
        /// Interface name
        interface: String,

        /// Port mode
        #[arg(long, value_enum, default_value = "access")]
        mode: VlanMode,

        /// Access VLAN id; `0` removes the VLAN
        #[arg(long, default_value = "")]
        vlan_id: String,

        /// Trunk VLAN list (e.g. `10,20,30-40`)
        #[arg(long, default_value = "")]
        trunk_vlans: String,

        /// Native VLAN in trunk mode
        #[arg(long, default_value = "")]
        default_id: String,
    },

    /// Assign addresses to a VLAN interface
    AddIp {
        /// VLAN interface name (e.g. vlan_10)
        interface: String,

        /// Addresses with prefix length (repeatable or comma-separated)
        #[arg(long = "ip", required = true, value_delimiter = ',')]
        ips: Vec<String>,
    },

    /// Remove every address from a VLAN interface
    FlushIp {
        /// VLAN interface name
        interface: String,
    },

    /// Bring an interface up or down
    Status {
        /// Interface name
        interface: String,

        /// Target link state
        #[arg(value_enum)]
        state: LinkStateArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VlanMode {
    Access,
    Trunk,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LinkStateArg {
    Up,
    Down,
}

// --- Fields ---

#[derive(Debug, Args)]
pub struct FieldsArgs {
    #[command(subcommand)]
    pub command: FieldsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FieldsCommand {
    /// List all fields
    #[command(alias = "ls")]
    List,

    /// Show one field
    Get {
        /// Field id
        id: u64,
    },

    /// Create a field
    Create {
        /// Field name
        #[arg(long, required_unless_present = "from_file")]
        name: Option<String>,

        /// Byte offset into the payload
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Length in bytes
        #[arg(long, required_unless_present = "from_file")]
        length: Option<u32>,

        /// Value type (e.g. hex, uint, string)
        #[arg(long = "type", default_value = "hex")]
        field_type: String,

        /// Create from JSON file
        #[arg(long, short = 'F', conflicts_with_all = &["name", "length"])]
        from_file: Option<PathBuf>,
    },

    /// Replace a field
    Update {
        /// Field id
        id: u64,

        /// Load full payload from JSON file
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Delete a field
    Delete {
        /// Field id
        id: u64,
    },
}

// --- Rules ---

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// List all rules
    #[command(alias = "ls")]
    List,

    /// Show one rule
    Get {
        /// Rule id
        id: u64,
    },

    /// Create a rule
    Create {
        /// Rule name
        #[arg(long, required_unless_present = "from_file")]
        name: Option<String>,

        /// Match condition expression
        #[arg(long = "match", required_unless_present = "from_file")]
        match_condition: Option<String>,

        /// Actions, as the backend's JSON action list
        #[arg(long, default_value = "[]")]
        actions: String,

        /// Output options, as a JSON object
        #[arg(long, default_value = "")]
        output_options: String,

        /// Evaluation priority
        #[arg(long, default_value_t = 0)]
        priority: i64,

        /// Enable the rule (default: true)
        #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
        enabled: bool,

        /// Create from JSON file
        #[arg(long, short = 'F', conflicts_with_all = &["name", "match_condition"])]
        from_file: Option<PathBuf>,
    },

    /// Replace a rule
    Update {
        /// Rule id
        id: u64,

        /// Load full payload from JSON file
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Delete a rule
    Delete {
        /// Rule id
        id: u64,
    },

    /// Flip a rule between enabled and disabled
    Toggle {
        /// Rule id
        id: u64,
    },
}

// --- nftables rules ---

#[derive(Debug, Args)]
pub struct NftRulesArgs {
    #[command(subcommand)]
    pub command: NftRulesCommand,
}

#[derive(Debug, Subcommand)]
pub enum NftRulesCommand {
    /// List all nftables rules
    #[command(alias = "ls")]
    List,

    /// Show one nftables rule
    Get {
        /// nftables rule id
        id: u64,
    },

    /// Create an nftables rule
    Create {
        /// Rule name
        #[arg(long, required_unless_present = "from_file")]
        name: Option<String>,

        /// Verdict
        #[arg(long, value_enum, default_value = "queue")]
        action: NftAction,

        /// Protocol (tcp, udp, icmp, or empty for any)
        #[arg(long, default_value = "")]
        protocol: String,

        #[arg(long, default_value = "")]
        src_ip: String,

        #[arg(long, default_value = "")]
        dst_ip: String,

        #[arg(long, default_value = "")]
        src_port: String,

        #[arg(long, default_value = "")]
        dst_port: String,

        /// NFQUEUE number for the `queue` verdict
        #[arg(long, default_value = "0")]
        queue_num: String,

        /// Evaluation priority
        #[arg(long, default_value_t = 0)]
        priority: i64,

        /// Log matching packets with this prefix
        #[arg(long)]
        log_prefix: Option<String>,

        /// Create from JSON file
        #[arg(long, short = 'F', conflicts_with = "name")]
        from_file: Option<PathBuf>,
    },

    /// Replace an nftables rule
    Update {
        /// nftables rule id
        id: u64,

        /// Load full payload from JSON file
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Delete an nftables rule
    Delete {
        /// nftables rule id
        id: u64,
    },

    /// Flip an nftables rule between enabled and disabled
    Toggle {
        /// nftables rule id
        id: u64,
    },

    /// Push the stored rule set into the kernel
    Apply,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NftAction {
    Accept,
    Drop,
    Queue,
}

impl NftAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Drop => "drop",
            Self::Queue => "queue",
        }
    }
}

// --- Test mode ---

#[derive(Debug, Args)]
pub struct TestArgs {
    /// Packet bytes as a hex string
    #[arg(long = "hex", short = 'x')]
    pub hex_packet: String,

    /// Only evaluate this rule
    #[arg(long = "rule", short = 'r')]
    pub rule_id: Option<u64>,
}

// --- Logs ---

#[derive(Debug, Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LogsCommand {
    /// List processing logs
    #[command(alias = "ls")]
    List(LogsListArgs),

    /// Show one log entry
    Get {
        /// Log id
        id: u64,
    },

    /// Delete logs, optionally only those older than N days
    Clear {
        #[arg(long)]
        days: Option<u32>,
    },
}

#[derive(Debug, Default, Args)]
pub struct LogsListArgs {
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u32>,

    /// Entries per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Only entries produced by this rule
    #[arg(long)]
    pub rule_id: Option<u64>,

    /// Only entries with this result (success, error or dropped)
    #[arg(long)]
    pub result: Option<String>,
}

// --- Config ---

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// --- Completions ---

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
