//! Dicehole command-line player.
//!
//! Reads pointer events from a script file (or standard input) and prints
//! the resulting frames.

use std::{
    fs::File,
    io::{self, BufReader},
    process,
};

use clap::Parser as _;
use dicehole_cli::{
    args::Args,
    session::{self, SessionError},
};

fn run(args: &Args) -> Result<(), SessionError> {
    let mut puzzle = session::build_puzzle(args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.script {
        Some(path) => {
            let file = File::open(path)?;
            session::run_script(&mut puzzle, BufReader::new(file), &mut out)
        }
        None => session::run_script(&mut puzzle, io::stdin().lock(), &mut out),
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
