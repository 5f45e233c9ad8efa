use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::epg_document::{self, Document};
use crate::file_utils::FileManager;
use crate::normalization::{NormalizationSummary, Normalizer};
use crate::sources::SourceLocation;
use crate::validation::{InspectionReport, Inspector};

// @module: Application controller for guide inspection and normalization

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch, decompress and parse a guide
    pub async fn load_document(&self, location: &SourceLocation) -> Result<Document> {
        let source = location.open();
        debug!("Loading guide from {}", source.describe());

        let bytes = source.fetch().await?;
        let document = epg_document::decode(&bytes)
            .with_context(|| format!("Failed to decode guide from {}", location))?;

        info!(
            "Loaded {} channels and {} programmes",
            document.channels.len(),
            document.programmes.len()
        );
        Ok(document)
    }

    /// Inspect a guide and print per-entry JSON plus the violation summary
    pub async fn run_inspect(&self, location: &SourceLocation) -> Result<InspectionReport> {
        let report = self.inspect(location).await?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        report.write_to(&mut handle)?;
        handle.flush()?;

        Ok(report)
    }

    /// Inspect a guide without printing anything
    pub async fn inspect(&self, location: &SourceLocation) -> Result<InspectionReport> {
        let document = self.load_document(location).await?;
        let report = Inspector::new().inspect_document(&document);
        info!("{}", report.summary());
        Ok(report)
    }

    /// Normalize a guide and write the compressed result.
    ///
    /// Nothing is written unless every step before the write succeeded.
    pub async fn run_normalize(
        &self,
        location: &SourceLocation,
        output_path: &Path,
    ) -> Result<NormalizationSummary> {
        let start_time = std::time::Instant::now();
        let mut document = self.load_document(location).await?;

        let normalizer = Normalizer::new().with_entry_logging(self.config.log_entries);
        let progress = self.create_progress_bar();
        let summary = normalizer.normalize_document_with_progress(&mut document, &progress);

        let compressed = epg_document::encode(&document).context("Failed to encode guide")?;

        if FileManager::file_exists(output_path) {
            debug!("Overwriting existing file {:?}", output_path);
        }
        FileManager::write_atomic(output_path, &compressed)?;

        info!(
            "Guide updated and saved to {:?} ({} sport, {} movie, {} episode) in {:.1}s",
            output_path,
            summary.sport,
            summary.movie,
            summary.episode,
            start_time.elapsed().as_secs_f64()
        );
        Ok(summary)
    }

    // Per-entry log lines and a live bar would interleave on stderr
    fn create_progress_bar(&self) -> ProgressBar {
        if self.config.log_entries {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} programmes")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress
    }
}
