use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = nlascan::cli::Args::parse();
    nlascan::cli::run(args)
}
