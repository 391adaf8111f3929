///
/// Render Options
///
/// Controls how a byte sequence is laid out as a C array declaration:
/// - element_type: C type of each element (`uint8_t`)
/// - hex_digits: minimum number of hex digits per value (2)
/// - column_count: values per output line (8)
/// - linkage: whether the declaration is `static` (internal)
///
/// The column count is non-zero by construction, so rendering never has
/// to reject an option set.
///

use std::num::NonZeroUsize;

pub const DEFAULT_ELEMENT_TYPE: &str = "uint8_t";
pub const DEFAULT_HEX_DIGITS: usize = 2;
pub const DEFAULT_COLUMN_COUNT: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => panic!("column count must be non-zero"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linkage {
    /// File-local declaration, prefixed with `static`.
    #[default]
    Internal,
    /// No storage class specifier.
    External,
}

impl Linkage {
    pub fn qualifier(self) -> &'static str {
        match self {
            Linkage::Internal => "static ",
            Linkage::External => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub element_type: String,
    pub hex_digits: usize,
    pub column_count: NonZeroUsize,
    pub linkage: Linkage,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            element_type: DEFAULT_ELEMENT_TYPE.to_string(),
            hex_digits: DEFAULT_HEX_DIGITS,
            column_count: DEFAULT_COLUMN_COUNT,
            linkage: Linkage::Internal,
        }
    }
}
