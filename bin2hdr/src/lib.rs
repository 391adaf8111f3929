//!
//! bin2hdr - Binary to C Header Library
//!
//! Turns the raw bytes of a file into a C header that declares a static
//! byte array, so firmware blobs, shaders or certificates can be compiled
//! straight into a program.
//!
//! Modules:
//!
//! - options: Render options (element type, padding, columns, linkage)
//! - render: Formatting of a byte sequence as an array declaration
//! - header: Include-guard wrapping of the rendered array
//! - driver: Reading the input file and writing the header
//! - errors: Error types for the file driver
//!
//! Entry points:
//! - `render_array`: Render a declaration from bytes
//! - `render_header`: Render a complete header from bytes
//! - `generate_header_file`: Read a binary file and write its header
//!

pub mod driver;
pub mod errors;
pub mod header;
pub mod options;
pub mod render;

pub use driver::{generate_header_file, generate_header_file_with};
pub use errors::Bin2HdrError;
pub use header::{guard_token, render_header};
pub use options::{Linkage, RenderOptions};
pub use render::{render_array, HexLiteral};
