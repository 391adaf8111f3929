///
/// Header generation error types.
///
/// Rendering itself cannot fail; only the two file operations can. Both
/// are fatal and carry the offending path and the underlying I/O error.
///

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Bin2HdrError {
    #[error("Failed to read binary input {path}")]
    #[diagnostic(
        code(bin2hdr::read_input),
        help("check that the binary path exists and is readable")
    )]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write header output {path}")]
    #[diagnostic(
        code(bin2hdr::write_output),
        help("check that the output directory exists and is writable")
    )]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
