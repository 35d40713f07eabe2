use anyhow::Result;
use ghdash::cli::Cli;

fn main() -> Result<()> {
    ghdash::logging::init();
    let cli = Cli::parse();
    cli.execute()
}
