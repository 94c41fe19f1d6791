//! `dreamlink key` and `dreamlink seq`: key-press commands.

use dreamlink_core::RemoteCommand;

use crate::cli::{GlobalOpts, KeyArgs, SeqArgs};
use crate::error::CliError;

use super::util;

pub async fn key(args: KeyArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::connect(global, None).await?;

    let mut name = args.name;
    if args.long_press && !name.ends_with("_LONG") {
        name.push_str("_LONG");
    }

    let outcome = session
        .adapter
        .dispatch(
            &session.entity_id,
            RemoteCommand::SendCmd {
                command: name.clone(),
                repeat: Some(args.repeat),
            },
        )
        .await;
    util::finish(&outcome, &name, global.quiet)
}

pub async fn seq(args: SeqArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::connect(global, None).await?;
    let requested = args.names.join(" ");

    let outcome = session
        .adapter
        .dispatch(
            &session.entity_id,
            RemoteCommand::SendCmdSequence {
                sequence: args.names,
                delay_ms: args.delay,
            },
        )
        .await;
    util::finish(&outcome, &requested, global.quiet)
}
