use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use tracing::{error, info};

use ipcount::utils::{setup_logging, validate_args};
use ipcount::{analyze_input, build_report, write_report, Args};

fn run(args: &Args) -> Result<()> {
    validate_args(args)?;

    let result = analyze_input(args)?;
    let report = build_report(&result.counts, args.sort, args.top);
    info!(
        action = "report",
        component = "output",
        entries = report.len(),
        sort = ?args.sort,
        top = args.top,
        "Writing report"
    );

    let stdout = io::stdout();
    write_report(BufWriter::new(stdout.lock()), &report).context("Failed to write report")
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
