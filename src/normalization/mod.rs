/*!
 * Classification and reformatting of programme entries.
 *
 * - `extractor`: flattens a programme into plain strings
 * - `cleaner`: strips broadcast noise words from titles
 * - `classifier`: sport / episode / movie decision
 * - `dates`: air date and year derived from start timestamps
 * - `formatter`: category-specific title and description templates
 * - `normalizer`: the mutating pass over a whole document
 */

pub mod classifier;
pub mod cleaner;
pub mod dates;
pub mod extractor;
pub mod formatter;
pub mod normalizer;

pub use classifier::{Category, TitleBasis, classify, classify_with_basis};
pub use cleaner::clean_title;
pub use extractor::{ProgrammeFields, extract_fields};
pub use formatter::{FormattedText, format_programme};
pub use normalizer::{NormalizationSummary, NormalizedProgramme, Normalizer};
