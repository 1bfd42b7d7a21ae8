use std::fs;

use clap::Parser;
use matrica::{
    config::{SNAP_TOLERANCE, Settings, ZERO_TOLERANCE},
    dispatcher::core::Calculator,
    script::run_script,
};

/// matrica is a calculator for real numbers and matrices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells matrica to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Largest magnitude treated as zero when checking for singular matrices
    /// and division by zero.
    #[arg(short = 'e', long, default_value_t = ZERO_TOLERANCE)]
    zero_tolerance: f32,

    /// Largest distance from an integer at which result entries are snapped.
    #[arg(long, default_value_t = SNAP_TOLERANCE)]
    snap_tolerance: f32,

    /// Prints the tree of every evaluated expression to stderr.
    #[arg(short = 't', long)]
    show_tree: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let settings = Settings { zero_tolerance: args.zero_tolerance,
                              snap_tolerance: args.snap_tolerance, };
    let mut calculator = Calculator::with_settings(settings);

    match run_script(&mut calculator, &script, args.show_tree) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
