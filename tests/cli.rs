use assert_cmd::Command;
use image::{ImageBuffer, Rgb};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn picsim() -> Command {
    Command::cargo_bin("picsim").unwrap()
}

fn write_gradient(path: &Path) {
    let image = ImageBuffer::from_fn(64, 64, |x, y| Rgb([(x * 4) as u8, (y * 4) as u8, 128u8]));
    image.save(path).unwrap();
}

fn write_checkerboard(path: &Path) {
    let image = ImageBuffer::from_fn(64, 64, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([255u8, 255, 255])
        } else {
            Rgb([0u8, 0, 0])
        }
    });
    image.save(path).unwrap();
}

/// Reference gradient next to a directory holding an identical copy, a very
/// different picture and two files the scan must skip.
fn fixture() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let reference = tmp.path().join("ref.png");
    write_gradient(&reference);

    let pictures = tmp.path().join("pics");
    fs::create_dir(&pictures).unwrap();
    write_gradient(&pictures.join("copy.png"));
    write_checkerboard(&pictures.join("checker.png"));
    fs::write(pictures.join("readme.txt"), "notes").unwrap();
    fs::copy(reference.as_path(), pictures.join("photo.JPG")).unwrap();

    (tmp, reference, pictures)
}

#[test]
fn no_arguments_prints_usage_and_exits_zero() {
    picsim()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn extra_positional_arguments_print_usage_and_exit_zero() {
    let (_tmp, reference, pictures) = fixture();
    picsim()
        .arg(&reference)
        .arg(&pictures)
        .arg("surplus")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_reference_exits_with_status_one() {
    let (tmp, _reference, pictures) = fixture();
    picsim()
        .arg(tmp.path().join("missing.png"))
        .arg(&pictures)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.png"));
}

#[test]
fn unreadable_candidate_aborts_the_run() {
    let (_tmp, reference, pictures) = fixture();
    fs::write(pictures.join("corrupt.png"), "not a picture").unwrap();

    picsim()
        .arg(&reference)
        .arg(&pictures)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("corrupt.png"));
}

#[test]
fn identical_copy_lands_in_the_close_resemblance_tier() {
    let (_tmp, reference, pictures) = fixture();
    picsim()
        .arg(&reference)
        .arg(&pictures)
        .assert()
        .success()
        .stdout(predicate::str::contains(" *** Pictures found to be similar to"))
        .stdout(predicate::str::contains(
            " *** Pictures found to be identical/close resemblance to",
        ))
        .stdout(predicate::str::contains("0 copy.png"))
        .stdout(predicate::str::contains("checker.png"))
        .stdout(predicate::str::contains("readme.txt").not())
        .stdout(predicate::str::contains("photo.JPG").not());
}

#[test]
fn output_flag_writes_the_report_to_a_file() {
    let (tmp, reference, pictures) = fixture();
    let report = tmp.path().join("report.txt");

    picsim()
        .arg("-o")
        .arg(&report)
        .arg(&reference)
        .arg(&pictures)
        .assert()
        .success();

    let written = fs::read_to_string(&report).unwrap();
    assert!(written.contains(" *** Pictures found to be similar to"));
    assert!(written.contains("0 copy.png"));
}

#[test]
fn json_flag_emits_a_parseable_report() {
    let (_tmp, reference, pictures) = fixture();
    let output = picsim()
        .arg("--json")
        .arg(&reference)
        .arg(&pictures)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["reference"], reference.display().to_string());
    let close = report["close_resemblance"].as_array().unwrap();
    assert!(close.iter().any(|c| c["name"] == "copy.png"));
}

#[test]
fn missing_directory_still_renders_an_empty_report() {
    let (tmp, reference, _pictures) = fixture();
    picsim()
        .arg(&reference)
        .arg(tmp.path().join("absent"))
        .assert()
        .success()
        .stderr(predicate::str::contains("could not open directory"))
        .stdout(predicate::str::contains(" *** Pictures found to be similar to"))
        .stdout(predicate::str::contains(
            " *** Pictures found to be identical/close resemblance to",
        ));
}

#[test]
fn invalid_threshold_value_prints_usage_and_exits_zero() {
    let (_tmp, reference, pictures) = fixture();
    picsim()
        .arg("--threshold")
        .arg("not-a-number")
        .arg(&reference)
        .arg(&pictures)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
