///
/// Byte-Array Renderer
///
/// Formats a byte sequence as a C array declaration:
///
/// ```text
/// static uint8_t name[] = {
/// 	0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
/// 	0x08,
/// };
/// ```
///
/// Rows hold `column_count` values joined with ", ", rows are joined with
/// ",\n\t" and the last row carries a trailing comma. An empty sequence
/// renders as `{\n}` with no rows.
///

use std::fmt;

use crate::options::RenderOptions;

/// A byte rendered as `0x` followed by at least `digits` lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLiteral {
    pub value: u8,
    pub digits: usize,
}

impl HexLiteral {
    pub const fn new(value: u8, digits: usize) -> Self {
        Self { value, digits }
    }
}

impl fmt::Display for HexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0width$x}", self.value, width = self.digits)
    }
}

pub fn render_array(name: &str, bytes: &[u8], options: &RenderOptions) -> String {
    let rows: Vec<String> = bytes
        .chunks(options.column_count.get())
        .map(|row| render_row(row, options.hex_digits))
        .collect();

    tracing::debug!(array = name, bytes = bytes.len(), rows = rows.len(), "rendered array");

    let body = if rows.is_empty() {
        String::from("\n")
    } else {
        format!("\n\t{},\n", rows.join(",\n\t"))
    };

    format!(
        "{}{} {}[] = {{{}}};\n",
        options.linkage.qualifier(),
        options.element_type,
        name,
        body
    )
}

fn render_row(row: &[u8], digits: usize) -> String {
    row.iter()
        .map(|&value| HexLiteral::new(value, digits).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
