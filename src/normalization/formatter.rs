/*!
 * Category-specific title and description builders.
 *
 * Every builder ends the description with a parenthesized date (air date for
 * sport and episodes, release year for movies). When the date is unknown the
 * parenthetical is left out entirely instead of rendering "()".
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::classifier::{Category, EPISODE_MARKER_REGEX};
use super::cleaner::collapse_whitespace;
use super::dates::{format_airdate, format_year};

/// Words removed from a sport title to leave the participants
static MATCHUP_NOISE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:NFL|NBA|MLB|NHL|Football|Basketball|Hockey|Baseball|Game|Match|Live)\b",
    )
    .expect("Invalid matchup noise regex")
});

/// Rewritten title and description of a programme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    pub title: String,
    pub description: String,
}

/// Build the output text for an already classified programme
pub fn format_programme(
    category: Category,
    cleaned_title: &str,
    description: &str,
    start: &str,
) -> FormattedText {
    match category {
        Category::Sport => build_sport_text(cleaned_title, description, &format_airdate(start)),
        Category::Movie => build_movie_text(cleaned_title, description, &format_year(start)),
        Category::Episode => {
            build_episode_text(cleaned_title, description, &format_airdate(start))
        }
    }
}

/// `<matchup>. <description>. (<airdate>)`
pub fn build_sport_text(cleaned_title: &str, description: &str, airdate: &str) -> FormattedText {
    let matchup = extract_matchup(cleaned_title);
    let body = format!("{}. {}.", matchup, description);
    FormattedText {
        description: collapse_whitespace(&with_date_suffix(&body, airdate)),
        title: matchup,
    }
}

/// `<title>. <description>. (<year>)`
pub fn build_movie_text(cleaned_title: &str, description: &str, year: &str) -> FormattedText {
    let body = format!("{}. {}.", cleaned_title, description);
    FormattedText {
        title: cleaned_title.to_string(),
        description: with_date_suffix(&body, year),
    }
}

/// `<episode name> - <designator>. <description>. (<airdate>)`
pub fn build_episode_text(cleaned_title: &str, description: &str, airdate: &str) -> FormattedText {
    let designator = extract_designator(description);
    let episode_name = extract_episode_name(description, cleaned_title);

    let heading = if designator.is_empty() {
        episode_name
    } else {
        format!("{} - {}", episode_name, designator)
    };
    let body = format!("{}. {}.", heading, description);

    FormattedText {
        title: cleaned_title.to_string(),
        description: with_date_suffix(&body, airdate),
    }
}

/// Participants of a sport title: league and genre words removed.
///
/// Falls back to the title itself when nothing is left.
pub fn extract_matchup(cleaned_title: &str) -> String {
    let matchup = collapse_whitespace(&MATCHUP_NOISE_REGEX.replace_all(cleaned_title, " "));
    if matchup.is_empty() {
        cleaned_title.to_string()
    } else {
        matchup
    }
}

/// Canonical `S<n>E<n>` label of the first marker in the description, or ""
pub fn extract_designator(description: &str) -> String {
    EPISODE_MARKER_REGEX
        .captures(description)
        .map(|captures| {
            format!(
                "S{}E{}",
                strip_leading_zeros(&captures[1]),
                strip_leading_zeros(&captures[2])
            )
        })
        .unwrap_or_default()
}

/// Description text before its first period, falling back to the title
pub fn extract_episode_name(description: &str, cleaned_title: &str) -> String {
    description
        .split_once('.')
        .map(|(name, _)| name)
        .filter(|name| !name.is_empty())
        .unwrap_or(cleaned_title)
        .to_string()
}

// Digits only, so no integer overflow on absurd season numbers
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

// The description is embedded as authored; only sport text is collapsed
fn with_date_suffix(body: &str, date: &str) -> String {
    if date.is_empty() {
        body.to_string()
    } else {
        format!("{} ({})", body, date)
    }
}
