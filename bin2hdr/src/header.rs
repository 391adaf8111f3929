///
/// Header Generation
///
/// Wraps a rendered array in include-guard directives and the
/// `<stdint.h>` include needed for `uint8_t`:
///
/// ```text
/// #ifndef _BIN2HDR_GENERATED_<name>_
/// #define _BIN2HDR_GENERATED_<name>_
///
/// #include <stdint.h>
///
/// static uint8_t <name>[] = { ... };
///
/// #endif // _BIN2HDR_GENERATED_<name>_
/// ```
///
/// The layout must stay byte-for-byte stable: builds diff and cache the
/// generated headers.
///

use crate::options::RenderOptions;
use crate::render::render_array;

const GUARD_PREFIX: &str = "_BIN2HDR_GENERATED_";
const INCLUDE_DIRECTIVE: &str = "#include <stdint.h>";

pub fn guard_token(name: &str) -> String {
    format!("{}{}_", GUARD_PREFIX, name)
}

pub fn render_header(name: &str, bytes: &[u8], options: &RenderOptions) -> String {
    let guard = guard_token(name);
    let array = render_array(name, bytes, options);

    let mut out = String::with_capacity(array.len() + 3 * guard.len() + 64);
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str(INCLUDE_DIRECTIVE);
    out.push_str("\n\n");
    out.push_str(&array);
    out.push('\n');
    out.push_str(&format!("#endif // {}\n", guard));
    out
}
