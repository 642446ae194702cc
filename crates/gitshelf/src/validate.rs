//! Format validation for identifiers and record fields

use uuid::Uuid;

/// Parse a client-supplied record identifier.
///
/// Only the canonical hyphenated form is accepted; uuid's alternate input
/// formats (simple, braced, urn) are rejected.
pub fn parse_record_id(id: &str) -> Option<Uuid> {
    if id.len() != 36 {
        return None;
    }

    Uuid::try_parse(id).ok()
}

/// Validate a repository URL: `http` or `https` scheme followed by at
/// least one character, with no spaces or double quotes.
pub fn is_valid_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    !rest.is_empty() && !rest.contains([' ', '"'])
}
