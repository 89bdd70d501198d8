//! Log sanitization utilities
//!
//! Keeps response bodies short in debug logs and keeps API credentials out of
//! them entirely.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a credential left visible.
const MASK_VISIBLE: usize = 4;

/// Largest char boundary not above `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged. Longer ones are cut at a
/// char boundary and suffixed with their total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential, leaving only a short prefix to tell keys apart.
///
/// Values not longer than twice the visible prefix are masked completely.
pub fn mask_credential(s: &str) -> String {
    if s.chars().count() <= MASK_VISIBLE * 2 {
        "****".to_string()
    } else {
        let prefix: String = s.chars().take(MASK_VISIBLE).collect();
        format!("{prefix}****")
    }
}
