use std::{fs, path::PathBuf};

use clap::Parser;
use deutschcode::run;
use tracing_subscriber::EnvFilter;

/// deutschcode runs programs written in a small teaching language with
/// German keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run. Must end in `.dc`.
    #[arg(short, long, value_name = "FILE")]
    code: PathBuf,

    /// Debug mode logs every declaration, function definition and call to
    /// stderr.
    #[arg(short, long)]
    debug: bool,
}

/// Installs the stderr log subscriber.
///
/// `--debug` enables debug events for this crate; otherwise `RUST_LOG`
/// decides, falling back to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("deutschcode=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    if args.code.extension().is_none_or(|ext| ext != "dc") {
        eprintln!("Usage: deutschcode --code <FILE>.dc [--debug]");
        std::process::exit(2);
    }

    let script = fs::read_to_string(&args.code).unwrap_or_else(|e| {
                                                   eprintln!("Failed to read the input file '{}' ({e}). Perhaps this file does not exist?",
                                                             args.code.display());
                                                   std::process::exit(1);
                                               });

    if let Err(e) = run(&script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
