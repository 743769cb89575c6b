//! Alias subcommand handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use homegate_config::ConfigStore;

use crate::cli::{AliasArgs, AliasCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct AliasRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "ALIAS")]
    alias: String,
}

pub fn handle(args: AliasArgs, store: &ConfigStore, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AliasCommand::Set { mac, name } => {
            let mac = store.set_alias(&mac, &name)?;
            if !global.quiet {
                eprintln!("{} {mac} -> {name}", "✓".green());
            }
            Ok(())
        }

        AliasCommand::Import { macs, names } => {
            let imported = store.import_aliases(&macs, &names)?;
            if !global.quiet {
                eprintln!("{} {} aliases imported", "✓".green(), imported.len());
            }
            Ok(())
        }

        AliasCommand::List => {
            let cfg = store.load_or_default();
            let out = output::render(
                &global.output,
                &cfg.aliases,
                || {
                    cfg.aliases
                        .iter()
                        .enumerate()
                        .map(|(index, (mac, alias))| AliasRow {
                            index,
                            mac: mac.clone(),
                            alias: alias.clone(),
                        })
                        .collect()
                },
                || cfg.aliases.keys().cloned().collect(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
