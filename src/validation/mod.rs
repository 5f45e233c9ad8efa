/*!
 * Validation of guide documents as authored.
 *
 * - `rules`: the individual violation checks
 * - `inspector`: runs the rules over a document and builds the report
 */

pub mod inspector;
pub mod rules;

pub use inspector::{InspectedProgramme, InspectionReport, Inspector};
pub use rules::{Violation, check_fields};
