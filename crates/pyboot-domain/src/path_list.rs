use std::path::{is_separator, PathBuf, MAIN_SEPARATOR};

/// Delimiter used by the host's `PATH`-style variables.
pub const PATH_DELIMITER: char = if cfg!(windows) { ';' } else { ':' };

/// Splits a delimiter-separated directory list, keeping input order.
///
/// Empty segments are preserved: `"a;;b"` yields `["a", "", "b"]` and an
/// empty input yields a single empty entry. Callers filter empties with
/// [`non_empty_entries`] before using them as candidates.
pub fn split_path_list(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter).map(ToOwned::to_owned).collect()
}

pub fn non_empty_entries(entries: &[String]) -> impl Iterator<Item = &str> {
    entries
        .iter()
        .map(String::as_str)
        .filter(|entry| !entry.is_empty())
}

/// Joins a candidate directory with the interpreter filename using exactly
/// one separator, whether or not `directory` already ends with one.
pub fn join_executable(directory: &str, executable: &str) -> PathBuf {
    let mut joined = String::with_capacity(directory.len() + executable.len() + 1);
    joined.push_str(directory);
    if !directory.ends_with(is_separator) {
        joined.push(MAIN_SEPARATOR);
    }
    joined.push_str(executable);
    PathBuf::from(joined)
}
