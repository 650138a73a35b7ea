//! Compatibility shim for Jib's unescaped-backslash defect.
//!
//! Jib emits Windows-style paths inside JSON string literals without
//! escaping the backslashes, which breaks decoding. Doubling every
//! backslash before the JSON pass turns those raw separators into valid
//! escapes, and decoding turns them back into single backslashes, so the
//! fix-up has no net effect on output values. Delete this module once the
//! upstream output is fixed; nothing else depends on it.

/// Doubles every backslash byte in `payload`. All other bytes pass
/// through untouched, in order.
pub fn escape_backslashes(payload: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(payload.len());
    for &byte in payload {
        escaped.push(byte);
        if byte == b'\\' {
            escaped.push(b'\\');
        }
    }
    escaped
}
