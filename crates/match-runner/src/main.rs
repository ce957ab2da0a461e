use std::process;

mod config;
mod error;
mod match_runner;
mod statistics;

use config::Config;
use match_runner::MatchRunner;

fn main() {
    let config = Config::parse_args();

    let mut runner = MatchRunner::new();
    if let Err(e) = runner.run_match(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
