//! Integration tests for the generate command

use std::fs;
use std::path::{Path, PathBuf};

use flutter_scaffold::manifest::MANIFEST_FILE;
use flutter_scaffold::report::GenerationEvent;
use flutter_scaffold_cli::{FixedAnswer, GenerateCommand, ManifestStep};
use tempfile::TempDir;

const UNCONFIGURED_PUBSPEC: &str = "name: quick_wash\ndescription: demo\n";

fn project_root(temp_dir: &TempDir, name: &str) -> PathBuf {
    let root = temp_dir.path().join(name);
    fs::create_dir(&root).unwrap();
    root
}

fn generate(root: &Path, assume_yes: bool, answer: bool) -> flutter_scaffold_cli::GenerateOutcome {
    GenerateCommand::new(Some(root.to_path_buf()), assume_yes, false)
        .run(&mut Vec::<GenerationEvent>::new(), &FixedAnswer(answer))
        .unwrap()
}

/// Test the full first run and a clean rerun
#[test]
fn test_generate_then_rerun() {
    let temp_dir = TempDir::new().unwrap();
    let root = project_root(&temp_dir, "quick_wash");
    fs::write(root.join(MANIFEST_FILE), UNCONFIGURED_PUBSPEC).unwrap();

    let first = generate(&root, true, false);
    assert_eq!(first.project_name, "quick_wash");
    assert!(!first.has_failures());
    assert_eq!(first.created_count(), 48 + 11 + 1);
    assert!(matches!(
        first.manifest,
        ManifestStep::Done(GenerationEvent::ManifestPatched { .. })
    ));

    let pubspec = fs::read_to_string(root.join(MANIFEST_FILE)).unwrap();
    assert!(pubspec.starts_with("name: quick_wash\n"));

    let second = generate(&root, true, false);
    assert_eq!(second.created_count(), 0);
    assert_eq!(second.summary.skipped.len(), 48 + 11);
    assert!(matches!(
        second.manifest,
        ManifestStep::Done(GenerationEvent::Skipped { .. })
    ));
    assert_eq!(fs::read_to_string(root.join(MANIFEST_FILE)).unwrap(), pubspec);
}

/// Test that events reach the reporter in action order
#[test]
fn test_reporter_receives_manifest_last() {
    let temp_dir = TempDir::new().unwrap();
    let root = project_root(&temp_dir, "ordered_app");
    fs::write(root.join(MANIFEST_FILE), UNCONFIGURED_PUBSPEC).unwrap();

    let mut events: Vec<GenerationEvent> = Vec::new();
    GenerateCommand::new(Some(root), true, false)
        .run(&mut events, &FixedAnswer(false))
        .unwrap();

    assert_eq!(events.len(), 48 + 11 + 1);
    assert!(matches!(
        events.first(),
        Some(GenerationEvent::DirectoryCreated { .. })
    ));
    assert!(matches!(
        events.last(),
        Some(GenerationEvent::ManifestPatched { .. })
    ));
}

/// Test that a missing manifest is never created
#[test]
fn test_missing_manifest_not_created() {
    let temp_dir = TempDir::new().unwrap();
    let root = project_root(&temp_dir, "no_pubspec");

    let outcome = generate(&root, true, true);

    assert!(!root.join(MANIFEST_FILE).exists());
    assert!(matches!(
        outcome.manifest,
        ManifestStep::Done(GenerationEvent::Skipped { .. })
    ));
}

/// Test that --skip-manifest leaves the manifest alone
#[test]
fn test_skip_manifest_flag() {
    let temp_dir = TempDir::new().unwrap();
    let root = project_root(&temp_dir, "skip_it");
    fs::write(root.join(MANIFEST_FILE), UNCONFIGURED_PUBSPEC).unwrap();

    let outcome = GenerateCommand::new(Some(root.clone()), true, true)
        .run(&mut Vec::<GenerationEvent>::new(), &FixedAnswer(true))
        .unwrap();

    assert!(matches!(outcome.manifest, ManifestStep::Disabled));
    assert_eq!(
        fs::read_to_string(root.join(MANIFEST_FILE)).unwrap(),
        UNCONFIGURED_PUBSPEC
    );
}

/// Test that the config file can disable manifest confirmation
#[test]
fn test_config_disables_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let root = project_root(&temp_dir, "no_prompt");
    fs::write(root.join(MANIFEST_FILE), UNCONFIGURED_PUBSPEC).unwrap();
    fs::write(
        root.join("flutter_scaffold.toml"),
        "[manifest]\nconfirm = false\n",
    )
    .unwrap();

    // The prompt would say no, but it is never asked
    let outcome = generate(&root, false, false);
    assert!(matches!(
        outcome.manifest,
        ManifestStep::Done(GenerationEvent::ManifestPatched { .. })
    ));
}

/// Test that per-path failures are collected and the run continues
#[test]
fn test_partial_failure_reported() {
    let temp_dir = TempDir::new().unwrap();
    let root = project_root(&temp_dir, "blocked");
    // A file where the assets directory should go
    fs::write(root.join("assets"), "in the way").unwrap();

    let outcome = generate(&root, true, true);

    assert!(outcome.has_failures());
    let failed: Vec<_> = outcome.summary.failed.iter().map(|(p, _)| p.clone()).collect();
    assert_eq!(failed.len(), 1 + 5);
    assert!(failed.contains(&PathBuf::from("assets")));
    assert!(root.join("lib/main.dart").is_file());
}

/// Test that an invalid root is rejected before anything is written
#[test]
fn test_invalid_root_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does_not_exist");

    let result = GenerateCommand::new(Some(missing.clone()), true, false)
        .run(&mut Vec::<GenerationEvent>::new(), &FixedAnswer(true));

    assert!(result.is_err());
    assert!(!missing.exists());
}
