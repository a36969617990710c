//! Configuration options for case conversion and key walking.
//!
//! [`ConvertOptions`] tunes both the string-level engine and the structural
//! walker:
//!
//! - `preserve_abbreviations`: treat runs of two or more uppercase letters
//!   (`HTML`, `API`) as atomic parts that are never re-cased
//! - `ignore_keys`: key names the walker leaves untouched
//! - `only_keys`: if set, the walker converts *only* these key names
//!
//! When a key appears in both sets, ignore wins.
//!
//! ## Examples
//!
//! ```rust
//! use keycase::{convert_case_with_options, CaseStyle, ConvertOptions};
//!
//! let options = ConvertOptions::new().with_preserve_abbreviations();
//! let snake = convert_case_with_options("userHTMLData", CaseStyle::Snake, &options);
//! assert_eq!(snake, "user_HTML_data");
//! ```

use std::collections::HashSet;

/// Options shared by [`convert_case_with_options`] and
/// [`convert_object_keys_with_options`].
///
/// Unset fields take their documented defaults: abbreviations are re-cased
/// like any other word, no keys are ignored, and all keys are converted.
///
/// # Examples
///
/// ```rust
/// use keycase::ConvertOptions;
///
/// let options = ConvertOptions::new()
///     .with_preserve_abbreviations()
///     .with_ignore_keys(["id", "_meta"]);
///
/// assert!(options.preserve_abbreviations);
/// assert!(options.ignore_keys.contains("id"));
/// assert!(options.only_keys.is_none());
/// ```
///
/// [`convert_case_with_options`]: crate::convert_case_with_options
/// [`convert_object_keys_with_options`]: crate::convert_object_keys_with_options
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Keep uppercase abbreviation runs (`^[A-Z]{2,}$` parts) as-is.
    pub preserve_abbreviations: bool,
    /// Key names exempt from conversion in the walker.
    pub ignore_keys: HashSet<String>,
    /// If set, restrict conversion to these original key names.
    pub only_keys: Option<HashSet<String>>,
}

impl ConvertOptions {
    /// Creates the default options (no abbreviation preservation, no key
    /// filtering).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables abbreviation preservation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keycase::ConvertOptions;
    ///
    /// let options = ConvertOptions::new().with_preserve_abbreviations();
    /// assert!(options.preserve_abbreviations);
    /// ```
    #[must_use]
    pub fn with_preserve_abbreviations(mut self) -> Self {
        self.preserve_abbreviations = true;
        self
    }

    /// Sets the key names the walker leaves unconverted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keycase::ConvertOptions;
    ///
    /// let options = ConvertOptions::new().with_ignore_keys(["id"]);
    /// assert!(options.ignore_keys.contains("id"));
    /// ```
    #[must_use]
    pub fn with_ignore_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the walker to converting only these original key names.
    ///
    /// A key listed here *and* in `ignore_keys` stays unconverted: ignore
    /// wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keycase::ConvertOptions;
    ///
    /// let options = ConvertOptions::new().with_only_keys(["user_name"]);
    /// assert!(options.only_keys.unwrap().contains("user_name"));
    /// ```
    #[must_use]
    pub fn with_only_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if the walker should leave `key` unchanged.
    ///
    /// This is the fixed precedence rule: ignored keys first, then the
    /// only-keys restriction when one is set.
    #[must_use]
    pub fn skips_key(&self, key: &str) -> bool {
        if self.ignore_keys.contains(key) {
            return true;
        }
        match &self.only_keys {
            Some(only) => !only.contains(key),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::new();
        assert!(!options.preserve_abbreviations);
        assert!(options.ignore_keys.is_empty());
        assert!(options.only_keys.is_none());
        assert!(!options.skips_key("anything"));
    }

    #[test]
    fn test_ignore_wins_over_only() {
        let options = ConvertOptions::new()
            .with_ignore_keys(["id"])
            .with_only_keys(["id", "user_name"]);
        assert!(options.skips_key("id"));
        assert!(!options.skips_key("user_name"));
    }

    #[test]
    fn test_only_keys_excludes_everything_else() {
        let options = ConvertOptions::new().with_only_keys(["user_name"]);
        assert!(!options.skips_key("user_name"));
        assert!(options.skips_key("created_at"));
    }
}
