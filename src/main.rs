use std::fs;

use clap::Parser;

/// precisa is a precision-aware evaluation engine for arithmetic
/// expressions and small statement sequences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells precisa to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// Evaluates with arbitrary-precision decimal literals and renders the
    /// result with 50 fixed fractional digits.
    #[arg(short = 'p', long)]
    high_precision: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match precisa::evaluate(&expression, args.high_precision) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
