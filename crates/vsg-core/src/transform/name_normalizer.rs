use std::fmt;

use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};

/// A name with multiple casing variants pre-computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName {
    pub original: String,
    pub pascal_case: String,
    pub camel_case: String,
    pub snake_case: String,
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// Create a `NormalizedName` from an arbitrary string, computing all casing variants.
pub fn normalize_name(name: &str) -> NormalizedName {
    // Handle names that start with numbers or contain special chars
    let sanitized = sanitize_identifier(name);

    NormalizedName {
        original: name.to_string(),
        pascal_case: sanitized.to_pascal_case(),
        camel_case: sanitized.to_lower_camel_case(),
        snake_case: sanitized.to_snake_case(),
    }
}

/// Handler symbol for an operationId: `get_file_content` → `getFileContent`.
pub fn to_handler_symbol(operation_id: &str) -> String {
    join_segments(operation_id, false)
}

/// Type symbol for an operationId: `get_file_content` → `GetFileContent`.
pub fn to_type_symbol(operation_id: &str) -> String {
    join_segments(operation_id, true)
}

/// Split on `_` and glue the segments back together, upper-casing the first
/// character of every segment after the first. Only first characters change
/// case; the rest of each segment is kept as written.
fn join_segments(operation_id: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(operation_id.len());

    for (i, segment) in operation_id.split('_').filter(|s| !s.is_empty()).enumerate() {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if i > 0 || upper_first {
            out.extend(first.to_uppercase());
        } else {
            out.extend(first.to_lowercase());
        }
        out.push_str(chars.as_str());
    }

    out
}

/// Rewrite `{param}` path segments into `:param` route segments.
///
/// `/items/{id}/tags/{tag}` → `/items/:id/tags/:tag`. Anything outside braces
/// is copied unchanged. A `{` that is unterminated, or whose name is empty or
/// contains `{` or `:`, is copied as a literal character, so applying the
/// rewrite twice gives the same result as applying it once.
pub fn to_route_pattern(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}').map(|close| (close, &after[..close])) {
            Some((close, name)) if is_param_name(name) => {
                out.push(':');
                out.push_str(name);
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['{', ':'])
}

/// Sanitize a string to be a valid identifier.
fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_separator = false;

    for (i, ch) in name.chars().enumerate() {
        if ch.is_alphanumeric() {
            if i == 0 && ch.is_ascii_digit() {
                result.push('_');
            }
            if prev_was_separator && !result.is_empty() {
                result.push('_');
            }
            result.push(ch);
            prev_was_separator = false;
        } else {
            prev_was_separator = true;
        }
    }

    if result.is_empty() {
        return "unnamed".to_string();
    }

    result
}
