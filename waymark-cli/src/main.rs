use std::fs;

use facet::Facet;
use facet_args as args;
use tracing_subscriber::EnvFilter;

/// Trace an ASCII path diagram, collecting its waypoint letters
#[derive(Facet, Debug)]
struct Args {
    /// Input map file
    #[facet(args::named, args::short = 'f')]
    file: String,

    /// Log walker activity to stderr
    #[facet(args::named, args::short = 'v')]
    verbose: bool,
}

fn main() {
    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let input = fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", args.file, e);
        std::process::exit(1);
    });

    match waymark::trace(&input) {
        Ok(trail) => {
            println!("Letters: {}", trail.letters);
            println!("Path: {}", trail.path);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
