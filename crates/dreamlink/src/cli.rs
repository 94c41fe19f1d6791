//! Clap definitions for the `dreamlink` binary.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "dreamlink",
    version,
    about = "Remote control for Enigma2 / Dreambox receivers",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Receiver address as `host[:port]` (overrides the profile)
    #[arg(short = 'H', long, global = true, env = "DREAMLINK_HOST")]
    pub host: Option<String>,

    /// Web-interface username
    #[arg(short = 'u', long, global = true, env = "DREAMLINK_USERNAME")]
    pub username: Option<String>,

    /// Web-interface password
    #[arg(
        short = 'p',
        long,
        global = true,
        env = "DREAMLINK_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Named device profile from the config file
    #[arg(short = 'd', long, global = true)]
    pub device: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress state-update output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show receiver name, MAC address, and current state
    Info,

    /// List the symbolic key names a receiver accepts
    Keys(KeysArgs),

    /// Press a remote-control key
    Key(KeyArgs),

    /// Press a sequence of keys with a delay between them
    Seq(SeqArgs),

    /// Switch the receiver on or off, or query power state
    Power(PowerArgs),

    /// Control the audio downmix setting
    Downmix(DownmixArgs),

    /// Run the adapter and report state changes until interrupted
    Watch(WatchArgs),
}

#[derive(Debug, Args)]
pub struct KeysArgs {
    /// Also list the extended low-level KEY_* names
    #[arg(long)]
    pub extended: bool,
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Symbolic key name (e.g. VOLUME_UP), KEY_* name, or raw code
    pub name: String,

    /// Send as a long press
    #[arg(long)]
    pub long_press: bool,

    /// Press the key this many times
    #[arg(short = 'r', long, default_value_t = 1)]
    pub repeat: u32,
}

#[derive(Debug, Args)]
pub struct SeqArgs {
    /// Key names to press in order
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Delay between presses in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay: u64,
}

#[derive(Debug, Args)]
pub struct PowerArgs {
    #[command(subcommand)]
    pub command: PowerCommand,
}

#[derive(Debug, Subcommand)]
pub enum PowerCommand {
    /// Wake the receiver from standby
    On,
    /// Put the receiver into standby
    Off,
    /// Press the power key
    Toggle,
    /// Print the current power state
    Status,
}

#[derive(Debug, Args)]
pub struct DownmixArgs {
    #[command(subcommand)]
    pub command: DownmixCommand,
}

#[derive(Debug, Subcommand)]
pub enum DownmixCommand {
    /// Enable stereo downmix
    On,
    /// Disable stereo downmix
    Off,
    /// Flip the current downmix setting
    Toggle,
    /// Print the current downmix setting
    Status,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Reconciliation interval in seconds
    #[arg(long)]
    pub interval: Option<u64>,
}
