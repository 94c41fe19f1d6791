//! `dreamlink power`: power state commands.

use dreamlink_core::RemoteCommand;

use crate::cli::{GlobalOpts, PowerArgs, PowerCommand};
use crate::error::CliError;

use super::util;

pub async fn handle(args: &PowerArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let command = match args.command {
        PowerCommand::Status => {
            let client = util::client_for(global)?;
            let standby = client.power_state().await?;
            println!("{}", util::on_off(!standby));
            return Ok(());
        }
        PowerCommand::On => RemoteCommand::On,
        PowerCommand::Off => RemoteCommand::Off,
        PowerCommand::Toggle => RemoteCommand::Toggle,
    };

    let session = util::connect(global, None).await?;
    let outcome = session.adapter.dispatch(&session.entity_id, command).await;
    util::finish(&outcome, "power", global.quiet)
}
