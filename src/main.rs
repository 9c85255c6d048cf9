//! Lexis CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexis::cli::args::*;
use lexis::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = LexisArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // -v
        3 => LevelFilter::Debug, // -vv
        _ => LevelFilter::Trace, // -vvv and more
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
