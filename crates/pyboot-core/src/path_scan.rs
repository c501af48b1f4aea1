use std::ffi::OsStr;

use pyboot_domain::split_path_list;
use tracing::debug;

use crate::config::EnvSnapshot;
use crate::error::LaunchError;

/// Reads and splits the directory list held in `var`.
///
/// The returned entries keep empty segments; the ranker drops them. A
/// segment that is not valid unicode is skipped on its own so the rest of
/// the list still yields candidates.
pub fn scan_path_variable(
    env: &EnvSnapshot,
    var: &str,
    delimiter: char,
) -> Result<Vec<String>, LaunchError> {
    let raw = env.var_os(var).ok_or_else(|| LaunchError::EnvironmentRead {
        var: var.to_string(),
        reason: "is not set".to_string(),
    })?;
    let entries = match raw.to_str() {
        Some(text) => split_path_list(text, delimiter),
        None => split_lossy_segments(var, raw, delimiter),
    };
    debug!(%var, entries = entries.len(), "scanned directory list");
    Ok(entries)
}

fn split_lossy_segments(var: &str, raw: &OsStr, delimiter: char) -> Vec<String> {
    let mut buf = [0; 4];
    let delimiter = delimiter.encode_utf8(&mut buf).as_bytes();
    split_bytes(raw.as_encoded_bytes(), delimiter)
        .into_iter()
        .enumerate()
        .filter_map(|(position, segment)| match std::str::from_utf8(segment) {
            Ok(text) => Some(text.to_string()),
            Err(_) => {
                debug!(
                    %var,
                    position,
                    segment = %String::from_utf8_lossy(segment),
                    "skipping directory that is not valid unicode"
                );
                None
            }
        })
        .collect()
}

fn split_bytes<'a>(raw: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index + delimiter.len() <= raw.len() {
        if raw[index..].starts_with(delimiter) {
            segments.push(&raw[start..index]);
            index += delimiter.len();
            start = index;
        } else {
            index += 1;
        }
    }
    segments.push(&raw[start..]);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiter_keeping_empties() {
        let env = EnvSnapshot::from_pairs([("PATH", r"C:\Windows;;C:\Python27;")]);
        let entries = scan_path_variable(&env, "PATH", ';').expect("path entries");
        assert_eq!(entries, vec![r"C:\Windows", "", r"C:\Python27", ""]);
    }

    #[test]
    fn missing_variable_is_an_environment_read_error() {
        let err = scan_path_variable(&EnvSnapshot::default(), "PATH", ';').unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("`PATH` is not set"), "{err}");
    }

    #[test]
    fn byte_split_matches_str_split() {
        let raw = "a;;b;";
        let segments: Vec<&[u8]> = split_bytes(raw.as_bytes(), b";");
        let expected: Vec<&[u8]> = raw.split(';').map(str::as_bytes).collect();
        assert_eq!(segments, expected);
        assert_eq!(split_bytes(b"", b";"), vec![b"" as &[u8]]);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_segment_is_skipped_and_the_rest_survive() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/usr/bin:/\xff\xfe:/opt/py::/\xff".to_vec());
        let env = EnvSnapshot::from_pairs([("PATH", raw)]);
        let entries = scan_path_variable(&env, "PATH", ':').expect("path entries");
        assert_eq!(entries, vec!["/usr/bin", "/opt/py", ""]);
    }
}
