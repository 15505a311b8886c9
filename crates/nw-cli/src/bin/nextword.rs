use std::fs;
use std::io;
use std::process;

use clap::Parser;

use nw_cli::cli::{Cli, DATA_PATH_ENV};
use nw_cli::stream;
use nw_cli::trace_init::init_tracing;
use nw_core::settings;
use nw_core::Suggester;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Some(path) = &cli.config {
        let toml = die!(
            fs::read_to_string(path),
            "Error reading {}: {}",
            path.display()
        );
        die!(
            settings::init_custom(toml),
            "Error in settings {}: {}",
            path.display()
        );
    }

    let Some(config) = cli.suggester_config() else {
        eprintln!("Error: no data directory (use -d or set {DATA_PATH_ENV})");
        process::exit(1);
    };
    let suggester = die!(Suggester::open(config), "Error: {}");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    die!(stream::run(&suggester, stdin, stdout), "Error: {}");
}
