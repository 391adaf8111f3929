///
/// File Driver
///
/// Reads a binary file, renders its header and writes it out:
/// 1. Read the whole input file into memory
/// 2. Render the complete header text
/// 3. Create (or truncate) the output file and write the text
///
/// The output file is only opened once rendering is done, so a missing
/// input never clobbers an existing header. File handles are scoped to
/// the function that opens them and are closed on every path.
///

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::errors::Bin2HdrError;
use crate::header::render_header;
use crate::options::RenderOptions;

pub fn generate_header_file(name: &str, input: &Path, output: &Path) -> Result<(), Bin2HdrError> {
    generate_header_file_with(name, input, output, &RenderOptions::default())
}

#[tracing::instrument(skip(input, output, options), fields(input = %input.display(), output = %output.display()))]
pub fn generate_header_file_with(
    name: &str,
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<(), Bin2HdrError> {
    let bytes = read_binary(input)?;
    let header = render_header(name, &bytes, options);
    write_header(output, &header)
}

fn read_binary(path: &Path) -> Result<Vec<u8>, Bin2HdrError> {
    let wrap = |source| Bin2HdrError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(wrap)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(wrap)?;

    tracing::debug!(bytes = bytes.len(), "read binary input");
    Ok(bytes)
}

fn write_header(path: &Path, header: &str) -> Result<(), Bin2HdrError> {
    let wrap = |source| Bin2HdrError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(header.as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    tracing::debug!(bytes = header.len(), "wrote header output");
    Ok(())
}
