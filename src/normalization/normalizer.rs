/*!
 * The mutating pass: classify every programme from its cleaned title and
 * rewrite title and description with the category template.
 *
 * The pass builds a new programme list and swaps it into the document in one
 * step; programmes are never edited through shared references.
 */

use indicatif::ProgressBar;
use log::{debug, info};
use serde::Serialize;

use crate::epg_document::{Document, Programme};

use super::classifier::{Category, TitleBasis, classify_with_basis};
use super::cleaner::clean_title;
use super::extractor::extract_fields;
use super::formatter::{FormattedText, format_programme};

/// Outcome of normalizing one programme
#[derive(Debug, Clone)]
pub struct NormalizedProgramme {
    pub programme: Programme,
    pub category: Category,
    pub text: FormattedText,
}

/// Per-category counts for a normalization run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationSummary {
    pub total: usize,
    pub sport: usize,
    pub movie: usize,
    pub episode: usize,
}

impl NormalizationSummary {
    fn record(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::Sport => self.sport += 1,
            Category::Movie => self.movie += 1,
            Category::Episode => self.episode += 1,
        }
    }
}

/// Rewrites programme text in place of the original
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    log_entries: bool,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log one info line per rewritten programme
    pub fn with_entry_logging(mut self, enabled: bool) -> Self {
        self.log_entries = enabled;
        self
    }

    /// Classify and rewrite a single programme
    pub fn normalize_programme(&self, programme: &Programme) -> NormalizedProgramme {
        let fields = extract_fields(programme);
        let cleaned_title = clean_title(&fields.title);
        let category = classify_with_basis(&fields.title, &fields.description, TitleBasis::Cleaned);
        let text = format_programme(category, &cleaned_title, &fields.description, &fields.start);

        NormalizedProgramme {
            programme: programme.with_text(text.title.clone(), text.description.clone()),
            category,
            text,
        }
    }

    pub fn normalize_document(&self, document: &mut Document) -> NormalizationSummary {
        self.normalize_document_with_progress(document, &ProgressBar::hidden())
    }

    /// Normalize every programme, ticking the progress bar once per entry
    pub fn normalize_document_with_progress(
        &self,
        document: &mut Document,
        progress: &ProgressBar,
    ) -> NormalizationSummary {
        info!("Total programmes: {}", document.programmes.len());
        progress.set_length(document.programmes.len() as u64);

        let mut summary = NormalizationSummary::default();
        let mut rewritten = Vec::with_capacity(document.programmes.len());

        for (index, programme) in document.programmes.iter().enumerate() {
            let normalized = self.normalize_programme(programme);
            summary.record(normalized.category);

            if self.log_entries {
                info!(
                    "{}: Channel={} | Title={} | Desc={}",
                    index + 1,
                    programme.channel().unwrap_or_default(),
                    normalized.text.title,
                    normalized.text.description
                );
            } else {
                debug!("{}: {} -> {}", index + 1, normalized.category, normalized.text.title);
            }

            rewritten.push(normalized.programme);
            progress.inc(1);
        }

        document.replace_programmes(rewritten);
        progress.finish_and_clear();
        summary
    }
}
