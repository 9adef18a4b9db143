//! Interpreter version parsing

use semver::Version;

/// Extract a version from interpreter output such as `Python 3.12.0rc1`
///
/// Missing minor/patch components default to 0; pre-release suffixes are
/// dropped.
pub fn parse_interpreter_version(output: &str) -> Option<Version> {
    let token = output
        .split_whitespace()
        .find(|t| t.starts_with(|c: char| c.is_ascii_digit()))?;

    let mut parts = token.split('.').map(leading_number);
    let major = parts.next().flatten()?;
    let minor = parts.next().flatten().unwrap_or(0);
    let patch = parts.next().flatten().unwrap_or(0);
    Some(Version::new(major, minor, patch))
}

fn leading_number(part: &str) -> Option<u64> {
    let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
