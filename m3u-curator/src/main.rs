use std::process;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{LevelFilter, debug};
use m3u_curator::{Args, ConsoleReporter, Curator, TerminalPrompter, load_config_or_default};

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn app_entry() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config_or_default(&args.config)?;
    let mut curator = Curator::new(config, TerminalPrompter, ConsoleReporter);
    curator.run(args.playlist)?;

    Ok(())
}

fn main() {
    if let Err(e) = app_entry() {
        debug!("Fatal error: {:?}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
