//! Log sanitization utilities
//!
//! Keeps certificates, private keys and tokens from being fully exposed in
//! debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

const PEM_KEY_MARKER: &str = "PRIVATE KEY-----";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
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
/// Bodies carrying a PEM private key are replaced wholesale. Anything else is
/// returned as-is when within the limit, otherwise cut to `TRUNCATE_LIMIT`
/// bytes with a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.contains(PEM_KEY_MARKER) {
        return format!("[redacted: private key material, {} bytes]", s.len());
    }
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
