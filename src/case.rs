//! Identifier segmentation, style rendering, and style detection.
//!
//! This is the string-level engine: [`split_to_parts`] breaks an identifier
//! into semantic words, [`convert_case_with_options`] renders those words in
//! a target [`CaseStyle`], and [`detect_case`] classifies an identifier's
//! existing style.
//!
//! Segmentation and rendering are total: every input produces a part list
//! (empty only for the empty string) and every render produces a string.
//! Only ASCII letters and digits participate in word boundaries; other
//! characters pass through untouched apart from the separator set `_ . -`.

use crate::options::ConvertOptions;
use crate::style::CaseStyle;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Generic word boundaries: a lowercase-or-digit character feeding into a
    // capital ("aB"), and the tail of an uppercase run feeding into a
    // capitalized word ("XMLParser" -> "XML Parser").
    static ref LOWER_THEN_UPPER: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref UPPER_RUN_THEN_WORD: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();

    // Abbreviation isolation, applied only in preserve mode. The two passes
    // together cover the same runs as the lookahead pattern
    // `[A-Z]{2,}(?=[A-Z][a-z]|\b)`: a run of two or more capitals either
    // feeding into a capitalized word, or ending at a non-word character or
    // the end of the input.
    static ref ABBR_THEN_WORD: Regex = Regex::new(r"([A-Z]{2,})([A-Z][a-z])").unwrap();
    static ref ABBR_AT_BREAK: Regex = Regex::new(r"([A-Z]{2,})([^0-9A-Za-z_]|$)").unwrap();

    // Style classifiers, anchored, tried in priority order. Camel requires at
    // least one hump, so a bare lowercase word matches nothing here. Train
    // tokens need a capital plus at least one more character, so "A-B-C"
    // falls through to cobol.
    static ref CAMEL: Regex = Regex::new(r"^[a-z][a-z0-9]*([A-Z][a-z0-9]*)+$").unwrap();
    static ref PASCAL: Regex = Regex::new(r"^[A-Z][a-z0-9]*([A-Z][a-z0-9]*)*$").unwrap();
    static ref SNAKE: Regex = Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)+$").unwrap();
    static ref UPPER_SNAKE: Regex = Regex::new(r"^[A-Z0-9]+(_[A-Z0-9]+)+$").unwrap();
    static ref KEBAB: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)+$").unwrap();
    static ref TRAIN: Regex = Regex::new(r"^[A-Z][a-z0-9]+(-[A-Z][a-z0-9]+)+$").unwrap();
    static ref COBOL: Regex = Regex::new(r"^[A-Z0-9]+(-[A-Z0-9]+)+$").unwrap();
    static ref DOT: Regex = Regex::new(r"^[a-z0-9]+(\.[a-z0-9]+)+$").unwrap();
}

/// Splits an identifier into its semantic word parts.
///
/// Parts keep their original case; rendering decides the final case. With
/// `preserve_abbr` set, runs of two or more uppercase letters are isolated
/// first so that generic boundary splitting cannot damage them.
///
/// # Examples
///
/// ```rust
/// use keycase::split_to_parts;
///
/// assert_eq!(split_to_parts("userProfileId", false), ["user", "Profile", "Id"]);
/// assert_eq!(split_to_parts("user.profile-id_name", false), ["user", "profile", "id", "name"]);
/// assert_eq!(split_to_parts("userHTMLData", true), ["user", "HTML", "Data"]);
/// assert!(split_to_parts("", false).is_empty());
/// ```
#[must_use]
pub fn split_to_parts(input: &str, preserve_abbr: bool) -> Vec<String> {
    let mut s = input.to_string();
    if preserve_abbr {
        s = ABBR_THEN_WORD.replace_all(&s, " $1 $2").into_owned();
        s = ABBR_AT_BREAK.replace_all(&s, " $1 $2").into_owned();
    }
    let s = LOWER_THEN_UPPER.replace_all(&s, "$1 $2");
    let s = UPPER_RUN_THEN_WORD.replace_all(&s, "$1 $2");
    let s = s.replace(['_', '.', '-'], " ");
    s.split_whitespace().map(str::to_owned).collect()
}

/// Returns `true` iff `word` is two or more ASCII uppercase letters and
/// nothing else.
pub(crate) fn is_abbreviation(word: &str) -> bool {
    word.len() >= 2 && word.chars().all(|c| c.is_ascii_uppercase())
}

/// Uppercases the first character and lowercases the rest, leaving preserved
/// abbreviations untouched. Empty input stays empty.
fn smart_capitalize(word: &str, preserve_abbr: bool) -> String {
    if preserve_abbr && is_abbreviation(word) {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&word[first.len_utf8()..].to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Applies a whole-word case transform, leaving preserved abbreviations
/// untouched. Empty input stays empty.
fn transform_preserving_abbr(
    word: &str,
    transform: fn(&str) -> String,
    preserve_abbr: bool,
) -> String {
    if word.is_empty() {
        return String::new();
    }
    if preserve_abbr && is_abbreviation(word) {
        return word.to_string();
    }
    transform(word)
}

fn join_transformed(
    parts: &[String],
    transform: fn(&str) -> String,
    preserve_abbr: bool,
    separator: &str,
) -> String {
    parts
        .iter()
        .map(|part| transform_preserving_abbr(part, transform, preserve_abbr))
        .collect::<Vec<_>>()
        .join(separator)
}

fn to_camel(parts: &[String], preserve_abbr: bool) -> String {
    let Some((first, rest)) = parts.split_first() else {
        return String::new();
    };
    // The leading part keeps its case whenever it is an abbreviation,
    // independent of the preserve flag.
    let mut out = if is_abbreviation(first) {
        first.clone()
    } else {
        first.to_ascii_lowercase()
    };
    for part in rest {
        out.push_str(&smart_capitalize(part, preserve_abbr));
    }
    out
}

/// Converts an identifier to the target style with the given options.
///
/// An [`Unknown`](CaseStyle::Unknown) target returns the input unchanged;
/// conversion never fails.
///
/// # Examples
///
/// ```rust
/// use keycase::{convert_case_with_options, CaseStyle, ConvertOptions};
///
/// let options = ConvertOptions::new().with_preserve_abbreviations();
/// assert_eq!(
///     convert_case_with_options("userHTMLData", CaseStyle::Camel, &options),
///     "userHTMLData"
/// );
/// ```
#[must_use]
pub fn convert_case_with_options(
    input: &str,
    target: CaseStyle,
    options: &ConvertOptions,
) -> String {
    let preserve_abbr = options.preserve_abbreviations;
    let parts = split_to_parts(input, preserve_abbr);
    match target {
        CaseStyle::Camel => to_camel(&parts, preserve_abbr),
        CaseStyle::Pascal => parts
            .iter()
            .map(|part| smart_capitalize(part, preserve_abbr))
            .collect(),
        CaseStyle::Snake => join_transformed(&parts, str::to_ascii_lowercase, preserve_abbr, "_"),
        CaseStyle::UpperSnake => {
            join_transformed(&parts, str::to_ascii_uppercase, preserve_abbr, "_")
        }
        CaseStyle::Kebab => join_transformed(&parts, str::to_ascii_lowercase, preserve_abbr, "-"),
        CaseStyle::Dot => join_transformed(&parts, str::to_ascii_lowercase, preserve_abbr, "."),
        CaseStyle::Train => parts
            .iter()
            .map(|part| smart_capitalize(part, preserve_abbr))
            .collect::<Vec<_>>()
            .join("-"),
        CaseStyle::Cobol => join_transformed(&parts, str::to_ascii_uppercase, preserve_abbr, "-"),
        CaseStyle::Unknown => input.to_string(),
    }
}

/// Classifies the naming convention of an identifier.
///
/// Patterns are tried in a fixed priority order; the first match wins and
/// anything unmatched is [`CaseStyle::Unknown`]. Single words without an
/// internal hump (for example `"id"`) are `Unknown` by design.
///
/// # Examples
///
/// ```rust
/// use keycase::{detect_case, CaseStyle};
///
/// assert_eq!(detect_case("userProfileId"), CaseStyle::Camel);
/// assert_eq!(detect_case("user-profile-id"), CaseStyle::Kebab);
/// assert_eq!(detect_case("id"), CaseStyle::Unknown);
/// ```
#[must_use]
pub fn detect_case(input: &str) -> CaseStyle {
    if CAMEL.is_match(input) {
        CaseStyle::Camel
    } else if PASCAL.is_match(input) {
        CaseStyle::Pascal
    } else if SNAKE.is_match(input) {
        CaseStyle::Snake
    } else if UPPER_SNAKE.is_match(input) {
        CaseStyle::UpperSnake
    } else if KEBAB.is_match(input) {
        CaseStyle::Kebab
    } else if TRAIN.is_match(input) {
        CaseStyle::Train
    } else if COBOL.is_match(input) {
        CaseStyle::Cobol
    } else if DOT.is_match(input) {
        CaseStyle::Dot
    } else {
        CaseStyle::Unknown
    }
}
