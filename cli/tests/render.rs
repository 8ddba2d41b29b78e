use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use shared::raster::{read_header, HEADER_LEN, RAS_MAGIC};

fn mandel() -> Command {
    let mut cmd = Command::cargo_bin("mandel").unwrap();
    cmd.env("RUST_LOG", "warn").env_remove("MANDEL_WORKERS");
    cmd
}

#[test]
fn writes_mandel_ras_in_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();

    mandel()
        .current_dir(dir.path())
        .args(["render", "4", "4", "-1", "-1", "1", "1", "50", "2", "--workers", "2"])
        .assert()
        .success();

    let path = dir.path().join("mandel.ras");
    let header = read_header(&path).unwrap();
    assert_eq!(header.magic, RAS_MAGIC);
    assert_eq!((header.width, header.height, header.depth), (4, 4, 8));
    assert_eq!(header.length, 16);
    assert_eq!(header.map_length, 768);

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), HEADER_LEN + 768 + 16);
    let pixels = &bytes[HEADER_LEN + 768..];
    assert_eq!(pixels[5], 255);
    assert!(pixels[0] < 50);
}

#[test]
fn uneven_blocks_fail_without_output() {
    let dir = tempfile::tempdir().unwrap();

    mandel()
        .current_dir(dir.path())
        .args(["render", "10", "10", "-1", "-1", "1", "1", "50", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("block height 3"));

    assert!(!dir.path().join("mandel.ras").exists());
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.ras");
    let second = dir.path().join("second.ras");

    for (path, workers) in [(&first, "1"), (&second, "3")] {
        mandel()
            .args(["render", "24", "16", "-2", "-1", "1", "1", "300", "4"])
            .args(["--workers", workers, "--output"])
            .arg(path)
            .assert()
            .success();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn unwritable_output_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.ras");

    mandel()
        .args(["render", "4", "4", "-1", "-1", "1", "1", "20", "2", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn palette_choice_changes_only_the_color_map() {
    let dir = tempfile::tempdir().unwrap();
    let cos = dir.path().join("cos.ras");
    let original = dir.path().join("original.ras");

    for (path, palette) in [(&cos, "cos"), (&original, "original")] {
        mandel()
            .args(["render", "8", "8", "-2", "-2", "2", "2", "64", "4", "--palette", palette])
            .arg("--output")
            .arg(path)
            .assert()
            .success();
    }

    let cos = fs::read(&cos).unwrap();
    let original = fs::read(&original).unwrap();
    assert_eq!(cos[..HEADER_LEN], original[..HEADER_LEN]);
    assert_ne!(cos[HEADER_LEN..HEADER_LEN + 768], original[HEADER_LEN..HEADER_LEN + 768]);
    assert_eq!(cos[HEADER_LEN + 768..], original[HEADER_LEN + 768..]);
}

#[test]
fn elapsed_seconds_go_to_stdout() {
    let dir = tempfile::tempdir().unwrap();

    mandel()
        .current_dir(dir.path())
        .args(["render", "8", "8", "-2", "-2", "2", "2", "32", "8"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9.e-]+\n$").unwrap());
}
