//! `dreamlink downmix`: audio downmix commands.

use dreamlink_core::RemoteCommand;

use crate::cli::{DownmixArgs, DownmixCommand, GlobalOpts};
use crate::error::CliError;

use super::util;

pub async fn handle(args: &DownmixArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let name = match args.command {
        DownmixCommand::Status => {
            let client = util::client_for(global)?;
            let enabled = client.downmix().await?;
            println!("{}", util::on_off(enabled));
            return Ok(());
        }
        DownmixCommand::On => "DOWNMIX_ON",
        DownmixCommand::Off => "DOWNMIX_OFF",
        DownmixCommand::Toggle => "DOWNMIX_TOGGLE",
    };

    let session = util::connect(global, None).await?;
    let outcome = session
        .adapter
        .dispatch(
            &session.entity_id,
            RemoteCommand::SendCmd {
                command: name.into(),
                repeat: None,
            },
        )
        .await;
    util::finish(&outcome, name, global.quiet)
}
