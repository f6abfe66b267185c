pub(crate) mod render;
pub(crate) mod summary;

use anyhow::Result;
use sqreport_config::{Cli, Commands};

pub(crate) fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => render::handle(args),
        Commands::Summary(args) => summary::handle(args),
    }
}
