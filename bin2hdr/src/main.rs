///
/// bin2hdr CLI - Binary to C header converter
///
/// Usage:
///   bin2hdr <array-name> <binary-path> <output-path>
///
/// Reads <binary-path> and writes <output-path> as a C header declaring
/// `static uint8_t <array-name>[]` behind an include guard. Prints nothing
/// on success. Missing arguments print a usage line and exit with 1; I/O
/// failures are reported on stderr and exit with 1.
///

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bin2hdr::generate_header_file;

/// Program name plus the three positionals.
const MIN_ARGS: usize = 4;

#[derive(Parser)]
#[command(name = "bin2hdr")]
#[command(about = "Convert a binary file into a C header declaring a byte array", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Name of the generated array, also used for the include guard
    array_name: String,

    /// Binary file to embed
    binary_path: PathBuf,

    /// Header file to write (created or overwritten)
    output_path: PathBuf,

    /// Surplus arguments are ignored
    #[arg(hide = true)]
    _ignored: Vec<OsString>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .init();

    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() < MIN_ARGS {
        println!("{}", usage(&program_name(&args)));
        return ExitCode::from(1);
    }

    // Everything after the program name is positional, even values
    // starting with `-`.
    let mut args = args.into_iter();
    let program = args.next();
    let cli = Cli::parse_from(program.into_iter().chain([OsString::from("--")]).chain(args));

    match generate_header_file(&cli.array_name, &cli.binary_path, &cli.output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(1)
        }
    }
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bin2hdr".to_string())
}

fn usage(program: &str) -> String {
    format!("Usage: {} <array-name> <binary-path> <output-path>", program)
}
