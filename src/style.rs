//! The closed set of supported naming conventions.
//!
//! [`CaseStyle`] is both the conversion target for [`convert_case`] and the
//! classification result of [`detect_case`]. The [`CaseStyle::Unknown`]
//! variant is an output-only sentinel: detection returns it when no pattern
//! matches, and passing it as a conversion target leaves the input unchanged
//! rather than failing.
//!
//! [`convert_case`]: crate::convert_case
//! [`detect_case`]: crate::detect_case

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A naming convention for identifiers.
///
/// # Examples
///
/// ```rust
/// use keycase::CaseStyle;
///
/// assert_eq!(CaseStyle::Snake.as_str(), "snake");
/// assert_eq!("upper_snake".parse::<CaseStyle>(), Ok(CaseStyle::UpperSnake));
/// assert!("spongebob".parse::<CaseStyle>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CaseStyle {
    /// `userProfileId`
    Camel,
    /// `UserProfileId`
    Pascal,
    /// `user_profile_id`
    Snake,
    /// `USER_PROFILE_ID`
    UpperSnake,
    /// `user-profile-id`
    Kebab,
    /// `user.profile.id`
    Dot,
    /// `User-Profile-Id`
    Train,
    /// `USER-PROFILE-ID`
    Cobol,
    /// Detection sentinel; as a conversion target it means "leave unchanged".
    #[default]
    Unknown,
}

impl CaseStyle {
    /// All recognized styles, in detection-priority order.
    pub const ALL: [CaseStyle; 8] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::UpperSnake,
        CaseStyle::Kebab,
        CaseStyle::Train,
        CaseStyle::Cobol,
        CaseStyle::Dot,
    ];

    /// Returns the lowercase tag for this style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::UpperSnake => "upper_snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
            CaseStyle::Train => "train",
            CaseStyle::Cobol => "cobol",
            CaseStyle::Unknown => "unknown",
        }
    }

    /// Returns `true` if this is the [`Unknown`](CaseStyle::Unknown) sentinel.
    #[inline]
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, CaseStyle::Unknown)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            "snake" => Ok(CaseStyle::Snake),
            "upper_snake" => Ok(CaseStyle::UpperSnake),
            "kebab" => Ok(CaseStyle::Kebab),
            "dot" => Ok(CaseStyle::Dot),
            "train" => Ok(CaseStyle::Train),
            "cobol" => Ok(CaseStyle::Cobol),
            "unknown" => Ok(CaseStyle::Unknown),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}
