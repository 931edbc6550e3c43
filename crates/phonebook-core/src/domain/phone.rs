use regex::Regex;
use std::sync::LazyLock;

const COUNTRY_CODE: char = '7';
const TRUNK_PREFIX: char = '8';
const FULL_LENGTH: usize = 11;

static EXTENSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)доб\.?\s*").expect("valid regex"));

/// Formats an 11-digit number as `+7(XXX)XXX-XX-XX`.
///
/// Anything that does not reduce to 11 digits starting with `7` (after a
/// leading `8` is swapped for `7`) is returned exactly as given.
pub fn normalize_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();

    if digits.starts_with(TRUNK_PREFIX) {
        digits.replace_range(..1, "7");
    }

    if digits.len() != FULL_LENGTH || !digits.starts_with(COUNTRY_CODE) {
        return raw.to_string();
    }

    let local = &digits[1..];
    format!(
        "+7({}){}-{}-{}",
        &local[..3],
        &local[3..6],
        &local[6..8],
        &local[8..]
    )
}

/// Like [`normalize_phone`], but keeps an extension written after `доб`.
///
/// Only the first marker splits the value; the extension keeps its digits up
/// to the next marker, if any.
pub fn normalize_phone_with_extension(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let Some(marker) = EXTENSION_MARKER.find(raw) else {
        return normalize_phone(raw);
    };

    let main = normalize_phone(&raw[..marker.start()]);
    let rest = &raw[marker.end()..];
    let extension: String = EXTENSION_MARKER
        .split(rest)
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();

    if extension.is_empty() {
        main
    } else {
        format!("{main} доб.{extension}")
    }
}
