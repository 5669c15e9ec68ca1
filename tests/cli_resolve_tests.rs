//! End-to-end tests for `lazymotion resolve` command.

mod fixtures;

use fixtures::*;

fn resolve(time: &str) -> std::process::Output {
    let (csv_path, temp_dir) = create_temp_csv("motion.csv", &uneven_timing_csv());
    lazymotion(temp_dir.path())
        .args(["resolve", csv_path.to_str().unwrap(), "--time", time])
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_resolve_first_frame_at_or_after() {
    let output = resolve("1.0");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2");
}

#[test]
fn test_resolve_exact_match() {
    let output = resolve("0.5");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
}

#[test]
fn test_resolve_negative_time_is_first_frame() {
    let output = resolve("-1");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0");
}

#[test]
fn test_resolve_past_end_is_not_found() {
    let output = resolve("5.0");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_resolve_non_numeric_time() {
    let output = resolve("later");
    // Rejected by argument parsing
    assert_eq!(output.status.code(), Some(2));
}
