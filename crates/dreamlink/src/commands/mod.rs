//! Command dispatch: bridges CLI args -> adapter commands -> output.

pub mod downmix;
pub mod info;
pub mod keys;
pub mod power;
pub mod remote;
pub mod util;
pub mod watch;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a device-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Info => info::handle(global).await,
        Command::Key(args) => remote::key(args, global).await,
        Command::Seq(args) => remote::seq(args, global).await,
        Command::Power(args) => power::handle(&args, global).await,
        Command::Downmix(args) => downmix::handle(&args, global).await,
        Command::Watch(args) => watch::handle(&args, global).await,
        // Keys is handled before dispatch
        Command::Keys(_) => unreachable!(),
    }
}
