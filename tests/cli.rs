//! End-to-end tests that run the compiled `diet-image` binary.
//!
//! Prompts cannot be answered here (stderr is not a terminal), so every
//! question takes its default answer, "no", unless `--yes` is passed.

use image::{ImageEncoder, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn diet_image(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diet-image"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// `photos/a.jpg` (400x300), `photos/b.png` (800x400), `photos/.thumbs`.
fn photos() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let photos = tmp.path().join("photos");
    fs::create_dir(&photos).unwrap();
    write_jpeg(&photos.join("a.jpg"), 400, 300);
    RgbImage::new(800, 400).save(photos.join("b.png")).unwrap();
    fs::write(photos.join(".thumbs"), b"cache").unwrap();
    (tmp, photos)
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn resizes_folder_into_min() {
    let (_tmp, photos) = photos();

    let output = diet_image(&[arg(&photos), "--width", "200"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("2 images are created"), "stdout: {text}");
    assert!(text.contains(arg(&photos.join("min"))));

    let min = photos.join("min");
    assert_eq!(image::image_dimensions(min.join("a.jpg")).unwrap(), (200, 150));
    assert_eq!(image::image_dimensions(min.join("b.png")).unwrap(), (200, 100));
    assert!(!min.join(".thumbs").exists());
}

#[test]
fn missing_input_exits_zero_without_creating_output() {
    let tmp = TempDir::new().unwrap();
    let typo = tmp.path().join("phtos");

    let output = diet_image(&[arg(&typo), "--width", "200"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains(arg(&typo)));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn existing_output_is_kept_without_a_yes() {
    let (_tmp, photos) = photos();
    let min = photos.join("min");
    fs::create_dir(&min).unwrap();
    fs::write(min.join("min-a.jpg"), b"older result").unwrap();

    let output = diet_image(&[arg(&photos.join("a.jpg")), "-w", "100", "-p", "min-"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("0 images are created"));
    assert!(stdout(&output).contains("1 skipped, 0 failed"));
    assert_eq!(fs::read(min.join("min-a.jpg")).unwrap(), b"older result");
}

#[test]
fn yes_overwrites_existing_output() {
    let (_tmp, photos) = photos();
    let min = photos.join("min");
    fs::create_dir(&min).unwrap();
    fs::write(min.join("min-a.jpg"), b"older result").unwrap();

    let output = diet_image(&[arg(&photos), "-w", "100", "-p", "min-", "--yes"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("2 images are created"));
    assert_eq!(
        image::image_dimensions(min.join("min-a.jpg")).unwrap(),
        (100, 75)
    );
}

#[test]
fn non_empty_folder_without_a_yes_stops() {
    let (_tmp, photos) = photos();
    let min = photos.join("min");
    fs::create_dir(&min).unwrap();
    fs::write(min.join("notes.txt"), b"keep me").unwrap();

    let output = diet_image(&[arg(&photos), "-w", "100"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Stopped"));
    assert!(!min.join("a.jpg").exists());
}

#[test]
fn unwritable_output_exits_zero() {
    let (_tmp, photos) = photos();
    let blocked = photos.join("a.jpg").join("out");

    let output = diet_image(&[arg(&photos), "-w", "100", "--out", arg(&blocked)]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Cannot write"));
}

#[test]
fn json_reports_every_outcome() {
    let (_tmp, photos) = photos();
    fs::write(photos.join("broken.jpg"), b"not an image").unwrap();

    let output = diet_image(&[arg(&photos), "-w", "50", "--json"]);

    assert!(output.status.success());
    let text = stdout(&output);
    let json_start = text.find('{').unwrap();
    let result: serde_json::Value = serde_json::from_str(&text[json_start..]).unwrap();
    assert_eq!(result["total"], 3);
    assert_eq!(result["success_count"], 2);
    let broken = result["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["filename"] == "broken.jpg")
        .unwrap();
    assert_eq!(broken["status"], "failed");
    assert!(broken["error"].is_string());
}

#[test]
fn zero_width_is_a_usage_error() {
    let (_tmp, photos) = photos();

    let output = diet_image(&[arg(&photos), "--width", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!photos.join("min").exists());
}
