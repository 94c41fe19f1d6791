//! `dreamlink watch`: run the adapter with its reconciliation loop and
//! print state changes until interrupted.

use std::time::Duration;

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;

use super::util;

pub async fn handle(args: &WatchArgs, global: &GlobalOpts) -> Result<(), CliError> {
    if args.interval == Some(0) {
        return Err(CliError::Validation {
            field: "interval".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    let session = util::connect(global, args.interval.map(Duration::from_secs)).await?;

    session.adapter.subscribe(&session.entity_id);
    session.adapter.start_polling().await;

    if !global.quiet {
        eprintln!("watching {} (Ctrl-C to stop)", session.entity_id);
    }

    tokio::signal::ctrl_c().await?;
    session.adapter.enter_standby().await;
    Ok(())
}
