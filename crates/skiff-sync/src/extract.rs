//! Locates the machine-readable sync-map payload inside Jib's build output.
//!
//! Jib interleaves human-readable log lines with a single marker line —
//! `BEGIN JIB JSON`, or `BEGIN JIB JSON: SYNCMAP/1` since Jib 2.0.0 —
//! followed by one line holding a JSON object. Scanning is an explicit
//! line pass so new version tags keep working without touching the
//! algorithm.

const MARKER: &[u8] = b"BEGIN JIB JSON";

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No marker line: the build produced no sync data for this run.
    /// Callers treat this as "fall back to a full build", not as a hard
    /// failure.
    #[error("no sync-map marker in build output")]
    MarkerMissing,

    #[error("sync-map marker not followed by a payload line")]
    PayloadMissing,

    #[error("multiple sync-map markers in build output")]
    DuplicateMarker,
}

/// Scans `output` line by line and returns the payload line following the
/// marker, without line terminators.
///
/// Both `\n` and `\r\n` line endings are accepted. Blank lines between
/// the marker and the payload are skipped. A second marker anywhere in
/// the stream is an error: it means the tool's output format changed and
/// silently using the first map could sync stale files.
pub fn extract_payload(output: &[u8]) -> Result<&[u8], ExtractError> {
    let mut seen_marker = false;
    let mut payload: Option<&[u8]> = None;

    for line in output.split(|&b| b == b'\n').map(trim_line) {
        if is_marker_line(line) {
            if seen_marker {
                return Err(ExtractError::DuplicateMarker);
            }
            seen_marker = true;
            continue;
        }
        if seen_marker && payload.is_none() && !line.is_empty() {
            payload = Some(line);
        }
    }

    match (seen_marker, payload) {
        (false, _) => Err(ExtractError::MarkerMissing),
        (true, None) => Err(ExtractError::PayloadMissing),
        (true, Some(line)) => Ok(line),
    }
}

/// A marker line ends with `BEGIN JIB JSON`, optionally continued by a
/// colon and a version tag (`BEGIN JIB JSON: SYNCMAP/1`). Build tools
/// prefix their own log tags, so anything before the marker is ignored.
fn is_marker_line(line: &[u8]) -> bool {
    let mut offset = 0;
    while let Some(pos) = line[offset..].windows(MARKER.len()).position(|w| w == MARKER) {
        let rest = &line[offset + pos + MARKER.len()..];
        if rest.is_empty() || rest[0] == b':' {
            return true;
        }
        offset += pos + 1;
    }
    false
}

fn trim_line(line: &[u8]) -> &[u8] {
    // arch-lint: allow(no-silent-result-drop) reason="Option::unwrap_or — no trailing CR means the line is already trimmed"
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_payload_after_bare_marker() {
        let output = b"building...\nBEGIN JIB JSON\n{\"direct\":[]}\n";
        assert_eq!(extract_payload(output).unwrap(), b"{\"direct\":[]}");
    }

    #[test]
    fn accepts_versioned_marker() {
        let output = b"BEGIN JIB JSON: SYNCMAP/1\n{}\n";
        assert_eq!(extract_payload(output).unwrap(), b"{}");
    }

    #[test]
    fn accepts_future_version_tags() {
        let output = b"BEGIN JIB JSON: SYNCMAP/2\n{}\n";
        assert_eq!(extract_payload(output).unwrap(), b"{}");
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let output = b"log line\r\nBEGIN JIB JSON\r\n{\"a\":1}\r\n";
        assert_eq!(extract_payload(output).unwrap(), b"{\"a\":1}");
    }

    #[test]
    fn accepts_log_prefixed_marker() {
        let output = b"[INFO] BEGIN JIB JSON\n{}\n";
        assert_eq!(extract_payload(output).unwrap(), b"{}");
    }

    #[test]
    fn rejects_marker_with_trailing_text() {
        let output = b"BEGIN JIB JSON and more words\n{}\n";
        assert!(matches!(
            extract_payload(output),
            Err(ExtractError::MarkerMissing)
        ));
    }

    #[test]
    fn skips_blank_lines_before_payload() {
        let output = b"BEGIN JIB JSON\n\n{\"a\":1}\n";
        assert_eq!(extract_payload(output).unwrap(), b"{\"a\":1}");
    }

    #[test]
    fn missing_marker_errors() {
        let output = b"just a normal build log\nnothing to see\n";
        assert!(matches!(
            extract_payload(output),
            Err(ExtractError::MarkerMissing)
        ));
    }

    #[test]
    fn marker_at_end_of_output_errors() {
        let output = b"log\nBEGIN JIB JSON\n";
        assert!(matches!(
            extract_payload(output),
            Err(ExtractError::PayloadMissing)
        ));
    }

    #[test]
    fn marker_followed_only_by_blank_lines_errors() {
        let output = b"BEGIN JIB JSON\n\n\n";
        assert!(matches!(
            extract_payload(output),
            Err(ExtractError::PayloadMissing)
        ));
    }

    #[test]
    fn second_marker_errors() {
        let output = b"BEGIN JIB JSON\n{}\nBEGIN JIB JSON: SYNCMAP/1\n{}\n";
        assert!(matches!(
            extract_payload(output),
            Err(ExtractError::DuplicateMarker)
        ));
    }

    #[test]
    fn only_first_payload_line_is_taken() {
        let output = b"BEGIN JIB JSON\n{\"first\":1}\n{\"second\":2}\n";
        assert_eq!(extract_payload(output).unwrap(), b"{\"first\":1}");
    }
}
