/*!
 * Read-only inspection of a guide document.
 *
 * Classifies every programme from its raw title and reports which rules it
 * breaks. The document is never modified.
 */

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::epg_document::{Document, Programme};
use crate::normalization::{Category, ProgrammeFields, TitleBasis, classify_with_basis, extract_fields};

use super::rules::{Violation, check_fields};

/// Inspection result for one programme
#[derive(Debug, Clone, Serialize)]
pub struct InspectedProgramme {
    /// 1-based position in the document
    pub index: usize,
    #[serde(flatten)]
    pub fields: ProgrammeFields,
    pub category: Category,
    pub violations: Vec<Violation>,
}

impl InspectedProgramme {
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Inspection result for a whole document
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    pub total_programmes: usize,
    pub non_compliant_count: usize,
    pub programmes: Vec<InspectedProgramme>,
}

impl InspectionReport {
    pub fn non_compliant(&self) -> impl Iterator<Item = &InspectedProgramme> {
        self.programmes.iter().filter(|programme| !programme.is_compliant())
    }

    pub fn all_compliant(&self) -> bool {
        self.non_compliant_count == 0
    }

    /// How many programmes broke each rule
    pub fn violation_counts(&self) -> BTreeMap<Violation, usize> {
        let mut counts = BTreeMap::new();
        for violation in self.programmes.iter().flat_map(|p| p.violations.iter()) {
            *counts.entry(*violation).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> String {
        format!(
            "{} of {} programmes have violations",
            self.non_compliant_count, self.total_programmes
        )
    }

    /// Write per-entry JSON followed by the violation summary
    pub fn write_to<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.programmes)?;
        writeln!(writer)?;
        writeln!(writer)?;
        writeln!(writer, "{}", self.summary())?;

        for (violation, count) in self.violation_counts() {
            writeln!(writer, "  {}: {}", violation, count)?;
        }
        for programme in self.non_compliant() {
            let messages: Vec<&str> = programme.violations.iter().map(Violation::message).collect();
            writeln!(
                writer,
                "  #{} [{}] {:?}: {}",
                programme.index,
                programme.fields.channel,
                programme.fields.title,
                messages.join("; ")
            )?;
        }
        Ok(())
    }
}

/// Runs the violation rules over programmes
#[derive(Debug, Clone, Copy, Default)]
pub struct Inspector;

impl Inspector {
    pub fn new() -> Self {
        Self
    }

    pub fn inspect_programme(&self, index: usize, programme: &Programme) -> InspectedProgramme {
        let fields = extract_fields(programme);
        let category = classify_with_basis(&fields.title, &fields.description, TitleBasis::Raw);
        let violations = check_fields(&fields, category);

        InspectedProgramme {
            index,
            fields,
            category,
            violations,
        }
    }

    pub fn inspect_document(&self, document: &Document) -> InspectionReport {
        let programmes: Vec<InspectedProgramme> = document
            .programmes
            .iter()
            .enumerate()
            .map(|(position, programme)| self.inspect_programme(position + 1, programme))
            .collect();
        let non_compliant_count = programmes.iter().filter(|p| !p.is_compliant()).count();

        debug!(
            "Inspected {} programmes, {} non-compliant",
            programmes.len(),
            non_compliant_count
        );

        InspectionReport {
            total_programmes: programmes.len(),
            non_compliant_count,
            programmes,
        }
    }
}
