/*!
 * End-to-end tests for the normalize workflow
 */

use anyhow::Result;
use epgtidy::app_config::Config;
use epgtidy::app_controller::Controller;
use epgtidy::epg_document::{self, TextField};
use epgtidy::file_utils::FileManager;
use epgtidy::normalization::extract_fields;
use epgtidy::sources::SourceLocation;
use std::fs;
use crate::common;

fn controller(log_entries: bool) -> Result<Controller> {
    Controller::with_config(Config {
        log_entries,
        ..Config::default()
    })
}

/// Test that a local guide is rewritten and saved under a new directory
#[tokio::test]
async fn test_runNormalize_withSampleGuide_shouldWriteRewrittenGuide() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_compressed_guide(temp_dir.path(), "epg.xml.gz", common::SAMPLE_GUIDE)?;
    let output = temp_dir.path().join("public").join("epg_modified.xml.gz");

    let summary = controller(true)?
        .run_normalize(&SourceLocation::Local(input), &output)
        .await?;

    assert_eq!(summary.total, 4);
    assert_eq!(summary.sport, 1);
    assert_eq!(summary.episode, 1);
    assert_eq!(summary.movie, 2);
    assert!(FileManager::file_exists(&output));

    let document = epg_document::decode(&fs::read(&output)?)?;
    let fields: Vec<_> = document.programmes.iter().map(extract_fields).collect();

    assert_eq!(fields[0].title, "Patriots at Jets");
    assert_eq!(fields[0].description, "Patriots at Jets. Week 5 matchup. (10/06/2024)");
    assert_eq!(fields[1].title, "The Office");
    assert_eq!(
        fields[1].description,
        "Jim pranks Dwight - S3E2. Jim pranks Dwight. - S3E2.. (01/15/2024)"
    );
    assert_eq!(fields[2].title, "Inception");
    assert_eq!(fields[2].description, "Inception. A thief enters dreams.. (2010)");
    assert_eq!(fields[3].title, "Late Movie");
    assert_eq!(fields[3].description, "Late Movie. .");
    Ok(())
}

/// Test that everything but title and description text survives the rewrite
#[tokio::test]
async fn test_runNormalize_withSampleGuide_shouldPreserveUntouchedContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_compressed_guide(temp_dir.path(), "epg.xml.gz", common::SAMPLE_GUIDE)?;
    let output = temp_dir.path().join("epg_modified.xml.gz");

    controller(false)?
        .run_normalize(&SourceLocation::Local(input), &output)
        .await?;

    let original = epg_document::parse_document(common::SAMPLE_GUIDE)?;
    let rewritten = epg_document::decode(&fs::read(&output)?)?;

    assert_eq!(rewritten.channels, original.channels);
    assert_eq!(rewritten.root_attributes, original.root_attributes);
    assert_eq!(rewritten.doctype, original.doctype);
    for (before, after) in original.programmes.iter().zip(rewritten.programmes.iter()) {
        assert_eq!(after.attributes, before.attributes);
        assert_eq!(after.other_children, before.other_children);
    }
    assert!(matches!(
        rewritten.programmes[0].title,
        Some(TextField::Wrapped { ref attributes, .. }) if attributes[0].value == "en"
    ));
    Ok(())
}

/// Test that normalizing an already normalized guide keeps titles stable
#[tokio::test]
async fn test_runNormalize_twice_shouldKeepTitlesStable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_compressed_guide(temp_dir.path(), "epg.xml.gz", common::SAMPLE_GUIDE)?;
    let first = temp_dir.path().join("first.xml.gz");
    let second = temp_dir.path().join("second.xml.gz");
    let controller = controller(false)?;

    controller.run_normalize(&SourceLocation::Local(input), &first).await?;
    controller
        .run_normalize(&SourceLocation::Local(first.clone()), &second)
        .await?;

    let once = epg_document::decode(&fs::read(&first)?)?;
    let twice = epg_document::decode(&fs::read(&second)?)?;
    let titles = |document: &epg_document::Document| -> Vec<String> {
        document.programmes.iter().map(|p| extract_fields(p).title).collect()
    };
    assert_eq!(titles(&twice), titles(&once));
    Ok(())
}

/// Test that a corrupt input aborts the run without writing output
#[tokio::test]
async fn test_runNormalize_withCorruptInput_shouldNotWriteOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "epg.xml.gz", b"not a gzip stream")?;
    let output = temp_dir.path().join("public").join("epg_modified.xml.gz");

    let result = controller(false)?
        .run_normalize(&SourceLocation::Local(input), &output)
        .await;

    assert!(result.is_err());
    assert!(!FileManager::file_exists(&output));
    assert!(!temp_dir.path().join("public").exists());
    Ok(())
}

/// Test that a document without a tv root is rejected without output
#[tokio::test]
async fn test_runNormalize_withWrongRoot_shouldNotWriteOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_compressed_guide(temp_dir.path(), "epg.xml.gz", "<guide></guide>")?;
    let output = temp_dir.path().join("epg_modified.xml.gz");

    let result = controller(false)?
        .run_normalize(&SourceLocation::Local(input), &output)
        .await;

    assert!(result.is_err());
    assert!(!FileManager::file_exists(&output));
    Ok(())
}
