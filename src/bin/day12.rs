use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use aoc_2016::error::LoadError;
use aoc_2016::run_report;

#[derive(Parser)]
#[command(
    name = "day12",
    version,
    about = "Runs an assembunny program and dumps the registers"
)]
struct Cli {
    /// Program file, one instruction per line (defaults to stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Value register `c` is seeded with for part b
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    part_b_c: i32,

    /// Print the parsed program before running it
    #[arg(short, long)]
    dump: bool,
}

fn report(cli: &Cli) -> Result<String, LoadError> {
    match &cli.input {
        Some(path) => run_report(BufReader::new(File::open(path)?), cli.part_b_c, cli.dump),
        None => run_report(io::stdin().lock(), cli.part_b_c, cli.dump),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match report(&cli) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            log::error!("{}", e);
            exit(1);
        }
    }
}
