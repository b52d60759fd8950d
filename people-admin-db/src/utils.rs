use heapless::String as HeaplessString;
use people_admin_api::ApiError;
use std::str::FromStr;

/// Byte capacity that holds `max_chars` characters of any UTF-8 text.
pub const fn utf8_capacity(max_chars: usize) -> usize {
    max_chars * 4
}

/// Converts a form value into a bounded string of at most `max_chars`
/// characters, reporting the field on overflow.
///
/// Columns are limited in characters, so `N` should come from
/// [`utf8_capacity`].
pub fn bounded_string<const N: usize>(
    field: &str,
    value: &str,
    max_chars: usize,
) -> Result<HeaplessString<N>, ApiError> {
    let too_long =
        || ApiError::ValidationError(format!("{field}: must be at most {max_chars} characters"));
    if value.chars().count() > max_chars {
        return Err(too_long());
    }
    HeaplessString::from_str(value).map_err(|_| too_long())
}

/// Escapes `%`, `_` and `\` so the term matches literally inside a LIKE pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
