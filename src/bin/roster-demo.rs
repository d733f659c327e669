//! Run the roster demonstration and print it to stdout.
//!
//! Usage:
//!   roster-demo
//!   roster-demo --section older-than --section sort
//!   roster-demo -v
//!
//! With no sections given, every section runs.

use std::io;
use std::process;

use clap::Parser;
use roster_pipeline::{Section, create_roster, demo, logging};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "roster-demo")]
#[command(about = "Filter, map and print a fixed roster of people")]
struct Args {
    /// Run only this section (repeatable)
    #[arg(long = "section", value_enum)]
    sections: Vec<Section>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let roster = create_roster();
    info!(people = roster.len(), "roster loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run(&roster, &args.sections, &mut out) {
        error!(error = %e, "demonstration failed");
        eprintln!("Demo error: {}", e);
        process::exit(1);
    }
}
