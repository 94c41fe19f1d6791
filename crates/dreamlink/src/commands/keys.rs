//! `dreamlink keys`: list the symbolic key names. Offline.

use dreamlink_api::keymap;

use crate::cli::KeysArgs;
use crate::error::CliError;

pub fn handle(args: &KeysArgs) -> Result<(), CliError> {
    let mut names: Vec<&str> = keymap::primary_names().collect();
    names.sort_unstable();
    for name in names {
        println!("{name}");
    }

    if args.extended {
        let mut extended: Vec<&str> = keymap::extended_names().collect();
        extended.sort_unstable();
        for name in extended {
            println!("{name}");
        }
    }
    Ok(())
}
