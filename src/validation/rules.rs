/*!
 * Violation rules for the read-only inspection pass.
 *
 * Each rule is checked independently, so one programme can collect several
 * violations. Rules judge the programme as authored: classification uses the
 * raw title.
 */

use serde::{Serialize, Serializer};

use crate::normalization::classifier::{has_episode_marker, has_release_year};
use crate::normalization::cleaner::contains_noise_words;
use crate::normalization::{Category, ProgrammeFields};

/// A rule a programme failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Violation {
    /// Title or description extracted as empty
    MissingTitleOrDescription,
    /// Raw title still carries LIVE/NEW/REPEAT
    NoiseWordsInTitle,
    /// Sport programme whose description names no "vs" pairing
    SportWithoutTeams,
    /// Non-sport description with neither an episode marker nor a release year
    UnrecognizedDescriptionFormat,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingTitleOrDescription => "missing title or description",
            Self::NoiseWordsInTitle => "title contains LIVE/NEW/REPEAT",
            Self::SportWithoutTeams => "sport title not showing teams",
            Self::UnrecognizedDescriptionFormat => {
                "description does not follow episode or movie format"
            }
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Check every rule against the extracted fields, in a fixed order
pub fn check_fields(fields: &ProgrammeFields, category: Category) -> Vec<Violation> {
    let mut violations = Vec::new();

    if fields.title.is_empty() || fields.description.is_empty() {
        violations.push(Violation::MissingTitleOrDescription);
    }
    if contains_noise_words(&fields.title) {
        violations.push(Violation::NoiseWordsInTitle);
    }
    match category {
        Category::Sport => {
            if !fields.description.to_lowercase().contains("vs") {
                violations.push(Violation::SportWithoutTeams);
            }
        }
        Category::Movie | Category::Episode => {
            if !has_episode_marker(&fields.description) && !has_release_year(&fields.description) {
                violations.push(Violation::UnrecognizedDescriptionFormat);
            }
        }
    }

    violations
}
