//! End-to-end tests for `lazymotion render` command.

mod fixtures;

use fixtures::*;
use std::fs;

#[test]
fn test_render_svg_to_stdout() {
    let (csv_path, temp_dir) = create_temp_csv("motion.csv", &upper_body_csv());

    let output = lazymotion(temp_dir.path())
        .args(["render", csv_path.to_str().unwrap(), "--frame", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let svg = String::from_utf8_lossy(&output.stdout);
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<line").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 4);
}

#[test]
fn test_render_svg_to_file() {
    let (csv_path, temp_dir) = create_temp_csv("motion.csv", &upper_body_csv());
    let svg_path = temp_dir.path().join("frame0.svg");

    let output = lazymotion(temp_dir.path())
        .args([
            "render",
            csv_path.to_str().unwrap(),
            "--frame",
            "0",
            "--output",
            svg_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 bones, 4 joints"));

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("<line"));
}

#[test]
fn test_render_svg_creates_output_directory() {
    let (csv_path, temp_dir) = create_temp_csv("motion.csv", &upper_body_csv());
    let svg_path = temp_dir.path().join("renders").join("pose").join("frame0.svg");

    let output = lazymotion(temp_dir.path())
        .args([
            "render",
            csv_path.to_str().unwrap(),
            "--frame",
            "0",
            "--output",
            svg_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(fs::read_to_string(&svg_path).unwrap().contains("<line"));
    assert!(!svg_path.with_extension("svg.tmp").exists());
}

#[test]
fn test_render_skips_half_known_keypoint() {
    let csv = format!(
        "{}\n2024-01-01T00:00:00Z,100,\n",
        keypoint_header(&["NOSE"])
    );
    let (csv_path, temp_dir) = create_temp_csv("motion.csv", &csv);

    let output = lazymotion(temp_dir.path())
        .args(["render", csv_path.to_str().unwrap(), "--frame", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let svg = String::from_utf8_lossy(&output.stdout);
    assert_eq!(svg.matches("<circle").count(), 0);
    assert_eq!(svg.matches("<line").count(), 0);
}

#[test]
fn test_render_frame_out_of_range() {
    let (csv_path, temp_dir) = create_temp_csv("motion.csv", &upper_body_csv());

    let output = lazymotion(temp_dir.path())
        .args(["render", csv_path.to_str().unwrap(), "--frame", "1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
