/*!
 * # epgtidy
 *
 * A Rust library for cleaning up XMLTV electronic programme guides.
 *
 * ## Features
 *
 * - Read gzip-compressed guides from a local file or an http(s) URL
 * - Classify every programme as a sport event, a movie or a serial episode
 * - Rewrite titles and descriptions into a category-specific format:
 *   - Sport: `<matchup>. <description>. (MM/DD/YYYY)`
 *   - Movie: `<title>. <description>. (YYYY)`
 *   - Episode: `<episode name> - S<n>E<n>. <description>. (MM/DD/YYYY)`
 * - Inspect a guide as authored and report rule violations
 * - Re-emit the guide in its original compressed form
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `epg_document`: Guide model, XMLTV codec and gzip encoding
 * - `normalization`: Classification and reformatting of programmes
 * - `validation`: Read-only inspection and violation rules
 * - `sources`: Local file and HTTP guide sources
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod epg_document;
pub mod errors;
pub mod file_utils;
pub mod normalization;
pub mod sources;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use epg_document::{Document, Programme, TextField};
pub use errors::EpgError;
pub use normalization::{Category, Normalizer, TitleBasis};
pub use validation::{InspectionReport, Inspector, Violation};
