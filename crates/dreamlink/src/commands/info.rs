//! `dreamlink info`: identify the receiver and show its current state.

use crate::cli::GlobalOpts;
use crate::error::CliError;

use super::util;

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let client = util::client_for(global)?;

    let info = client.device_info().await?;
    let standby = client.power_state().await?;
    let downmix = client.downmix().await?;

    println!("name:    {}", info.name);
    println!("mac:     {}", info.mac);
    println!("entity:  {}", info.entity_id());
    println!("power:   {}", util::on_off(!standby));
    println!("downmix: {}", util::on_off(downmix));
    Ok(())
}
