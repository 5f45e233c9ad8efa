/*!
 * Programme classification.
 *
 * Rules are ordered and mutually exclusive:
 * 1. Sport: the title names a league (NFL, NBA, MLB, NHL) as a whole word
 * 2. Episode: the description carries a season/episode marker such as `S3E2`
 * 3. Movie: everything else
 *
 * Classification is a pure function of the title it is handed. Which title
 * that is (raw or cleaned) is the caller's choice, expressed with `TitleBasis`.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use super::cleaner::clean_title;

static LEAGUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:NFL|NBA|MLB|NHL)\b").expect("Invalid league regex")
});

/// Season/episode marker; the numbers are captured for the designator
pub(crate) static EPISODE_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)S(\d+)E(\d+)\.?").expect("Invalid episode marker regex")
});

static RELEASE_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\d{4}\)").expect("Invalid release year regex")
});

/// Content category of a programme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sport,
    Movie,
    Episode,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Movie => "movie",
            Self::Episode => "episode",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which variant of the title a pass classifies from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBasis {
    /// The title exactly as authored; used when inspecting
    Raw,
    /// The title after noise-word cleanup; used when normalizing
    Cleaned,
}

impl TitleBasis {
    /// The title this basis classifies from
    pub fn resolve<'a>(&self, raw_title: &'a str) -> Cow<'a, str> {
        match self {
            Self::Raw => Cow::Borrowed(raw_title),
            Self::Cleaned => Cow::Owned(clean_title(raw_title)),
        }
    }
}

pub fn is_sport(title: &str) -> bool {
    LEAGUE_REGEX.is_match(title)
}

pub fn has_episode_marker(description: &str) -> bool {
    EPISODE_MARKER_REGEX.is_match(description)
}

/// Whether the description carries a parenthesized 4-digit year
pub fn has_release_year(description: &str) -> bool {
    RELEASE_YEAR_REGEX.is_match(description)
}

/// Classify from a title that has already been chosen by the caller
pub fn classify(title: &str, description: &str) -> Category {
    if is_sport(title) {
        Category::Sport
    } else if has_episode_marker(description) {
        Category::Episode
    } else {
        Category::Movie
    }
}

/// Classify from the raw title, resolved through the given basis
pub fn classify_with_basis(raw_title: &str, description: &str, basis: TitleBasis) -> Category {
    classify(&basis.resolve(raw_title), description)
}
