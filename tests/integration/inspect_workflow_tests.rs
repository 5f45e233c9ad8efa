/*!
 * End-to-end tests for the inspect workflow
 */

use anyhow::Result;
use epgtidy::app_config::Config;
use epgtidy::app_controller::Controller;
use epgtidy::sources::SourceLocation;
use epgtidy::validation::Violation;
use std::fs;
use crate::common;

/// Test that inspecting a local guide reports every programme
#[tokio::test]
async fn test_inspect_withSampleGuide_shouldReportEveryProgramme() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_compressed_guide(temp_dir.path(), "epg.xml.gz", common::SAMPLE_GUIDE)?;

    let report = Controller::with_config(Config::default())?
        .inspect(&SourceLocation::Local(input))
        .await?;

    assert_eq!(report.total_programmes, 4);
    assert_eq!(report.programmes[0].fields.channel, "espn.us");
    assert!(report.programmes[0].violations.contains(&Violation::SportWithoutTeams));
    Ok(())
}

/// Test that inspection leaves the input file byte-for-byte intact
#[tokio::test]
async fn test_inspect_withSampleGuide_shouldNotTouchInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_compressed_guide(temp_dir.path(), "epg.xml.gz", common::SAMPLE_GUIDE)?;
    let before = fs::read(&input)?;

    Controller::with_config(Config::default())?
        .inspect(&SourceLocation::Local(input.clone()))
        .await?;

    assert_eq!(fs::read(&input)?, before);
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

/// Test that a guide normalized once passes the noise-word rule
#[tokio::test]
async fn test_inspect_afterNormalize_shouldFindNoNoiseWords() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_compressed_guide(temp_dir.path(), "epg.xml.gz", common::SAMPLE_GUIDE)?;
    let output = temp_dir.path().join("epg_modified.xml.gz");
    let controller = Controller::with_config(Config {
        log_entries: false,
        ..Config::default()
    })?;

    controller.run_normalize(&SourceLocation::Local(input), &output).await?;
    let report = controller.inspect(&SourceLocation::Local(output)).await?;

    assert!(!report.violation_counts().contains_key(&Violation::NoiseWordsInTitle));
    assert!(!report.violation_counts().contains_key(&Violation::MissingTitleOrDescription));
    Ok(())
}

/// Test that a missing local guide is reported as an error
#[tokio::test]
async fn test_inspect_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let result = Controller::with_config(Config::default())?
        .inspect(&SourceLocation::Local(temp_dir.path().join("absent.xml.gz")))
        .await;

    assert!(result.is_err());
    Ok(())
}
