use std::io;

use anyhow::Context;

use libris_cli::{CliError, Console};
use libris_inventory::Inventory;
use libris_observability::ObservabilityConfig;

fn main() -> anyhow::Result<()> {
    libris_observability::init(&ObservabilityConfig::from_env());

    let mut inventory = Inventory::seeded();
    tracing::info!(records = inventory.len(), "library session started");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    match libris_cli::run(&mut inventory, &mut console) {
        Ok(()) => Ok(()),
        Err(CliError::InputClosed) => {
            tracing::info!("input closed; ending session");
            Ok(())
        }
        Err(err) => Err(err).context("library session failed"),
    }
}
