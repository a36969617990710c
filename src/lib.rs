//! # keycase
//!
//! Convert identifiers between naming conventions and recursively rename the
//! keys of nested values.
//!
//! ## What it does
//!
//! Two collaborating pieces:
//!
//! - A **segmenter/renderer** that splits an identifier into semantic word
//!   parts, optionally keeping uppercase abbreviation runs (`HTML`, `API`)
//!   intact, and renders the parts in any of eight styles: camel, pascal,
//!   snake, upper_snake, kebab, dot, train, and cobol. A companion detector
//!   classifies an identifier's existing style.
//! - A **structural key walker** that rewrites the keys of record values
//!   anywhere inside a nested document, leaving array elements and scalar
//!   values untouched, safely handling shared references and reference
//!   cycles.
//!
//! All conversion operations are total: an unrecognized target degrades to
//! returning the input unchanged, never to an error.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keycase = "0.1"
//! ```
//!
//! ### Converting strings
//!
//! ```rust
//! use keycase::{convert_case, detect_case, CaseStyle};
//!
//! assert_eq!(convert_case("userProfileID", CaseStyle::Snake), "user_profile_id");
//! assert_eq!(convert_case("user_profile_id", CaseStyle::Pascal), "UserProfileId");
//! assert_eq!(detect_case("user-profile-id"), CaseStyle::Kebab);
//! ```
//!
//! ### Preserving abbreviations
//!
//! ```rust
//! use keycase::{convert_case, convert_case_with_options, CaseStyle, ConvertOptions};
//!
//! let options = ConvertOptions::new().with_preserve_abbreviations();
//! assert_eq!(
//!     convert_case_with_options("userHTMLData", CaseStyle::Snake, &options),
//!     "user_HTML_data"
//! );
//! assert_eq!(convert_case("userHTMLData", CaseStyle::Camel), "userHtmlData");
//! ```
//!
//! ### Rewriting the keys of a document
//!
//! ```rust
//! use keycase::{convert_object_keys, value, CaseStyle};
//!
//! let doc = value!({
//!     "user_name": "Alice",
//!     "contact_info": { "email_address": "a@example.com" },
//!     "login_count": 3
//! });
//!
//! let out = convert_object_keys(&doc, CaseStyle::Camel);
//! let obj = out.as_object().unwrap();
//! assert!(obj.contains_key("userName"));
//! assert!(obj.contains_key("contactInfo"));
//! ```
//!
//! ## Cycle and aliasing safety
//!
//! [`Value`] composites are reference-counted handles, so a document can
//! contain the same object under two keys, or even refer back to itself. The
//! walker tracks source-object identity: it terminates on cycles, and shared
//! input objects come out as shared output objects rather than independent
//! copies.
//!
//! ## Scope
//!
//! Word segmentation is ASCII-only; the walker always builds new structures
//! and never mutates its input; there is no locale-aware capitalization and
//! no schema awareness. Concurrent use is unremarkable: the walker's only
//! state is a tracker local to each call.

pub mod case;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod style;
pub mod value;
pub mod walk;

pub use case::{convert_case_with_options, detect_case, split_to_parts};
pub use error::{Error, Result};
pub use map::KeyMap;
pub use options::ConvertOptions;
pub use style::CaseStyle;
pub use value::{Number, Value};
pub use walk::convert_object_keys_with_options;

/// Converts an identifier to the target style with default options.
///
/// # Examples
///
/// ```rust
/// use keycase::{convert_case, CaseStyle};
///
/// assert_eq!(convert_case("userProfileID", CaseStyle::Kebab), "user-profile-id");
/// assert_eq!(convert_case("userProfileID", CaseStyle::Cobol), "USER-PROFILE-ID");
/// ```
#[must_use]
pub fn convert_case(input: &str, target: CaseStyle) -> String {
    convert_case_with_options(input, target, &ConvertOptions::new())
}

/// Recursively converts all object keys of a value with default options.
///
/// # Examples
///
/// ```rust
/// use keycase::{convert_object_keys, value, CaseStyle};
///
/// let doc = value!({ "created_at": "2024-01-01" });
/// let out = convert_object_keys(&doc, CaseStyle::Camel);
/// assert!(out.as_object().unwrap().contains_key("createdAt"));
/// ```
#[must_use]
pub fn convert_object_keys(input: &Value, target: CaseStyle) -> Value {
    convert_object_keys_with_options(input, target, &ConvertOptions::new())
}
