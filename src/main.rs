use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use prefixer::get_result;

/// prefixer converts infix arithmetic expressions into prefix notation, one
/// expression per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Folds constant subexpressions before printing, so `2 * 3 + a` prints
    /// as `+ 6 a`.
    #[arg(short, long)]
    reduce: bool,

    /// File holding one infix expression per line.
    input: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file = match File::open(&args.input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", args.input.display());
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let result = match line {
            Ok(line) => get_result(line.trim(), args.reduce).map_err(|e| e.to_string()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(format!("Line is not valid UTF-8 text: {e}."))
            },
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.input.display());
                return ExitCode::FAILURE;
            },
        };
        match result {
            Ok(prefix) => println!("{prefix}"),
            Err(message) => {
                eprintln!("Error on line {}: {message}", index + 1);
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
