use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("consulting-site").unwrap()
}

#[test]
fn build_prints_the_page() {
    cmd()
        .arg("build")
        .assert()
        .success()
        .stdout(contains("<!DOCTYPE html>"))
        .stdout(contains("Client Success Stories"));
}

#[test]
fn build_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("index.html");

    cmd()
        .args(["build", "--output"])
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("id=\"contact\""));
}

#[test]
fn build_uses_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("site.toml");
    fs::write(
        &config,
        "[hero]\ntitle = \"Coaching for Teams\"\n\n[footer]\nyear = 2030\n",
    )
    .unwrap();

    cmd()
        .args(["build", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("Coaching for Teams"))
        .stdout(contains("2030 I DO Consulting"));
}

#[test]
fn rotate_wraps_backwards() {
    cmd()
        .args(["rotate", "prev"])
        .assert()
        .success()
        .stdout(contains("active 2 of 3: Priya M."))
        .stdout(contains("○○●"));
}

#[test]
fn rotate_jumps_to_indicator() {
    cmd()
        .args(["rotate", "next", "goto:1"])
        .assert()
        .success()
        .stdout(contains("active 1 of 3: Robert L."));
}

#[test]
fn rotate_rejects_unknown_command() {
    cmd()
        .args(["rotate", "sideways"])
        .assert()
        .failure()
        .stderr(contains("sideways"));
}

#[test]
fn rotate_refuses_disabled_section() {
    cmd()
        .args(["rotate", "--section", "testimonials", "next"])
        .assert()
        .failure()
        .stderr(contains("disabled"));
}

#[test]
fn defaults_round_trip_through_check() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("site.json");

    let output = cmd().args(["defaults", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    fs::write(&config, output.stdout).unwrap();

    cmd()
        .arg("check")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("3 reviews, 4 services"));
}

#[test]
fn check_rejects_empty_reviews() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("site.json");
    fs::write(&config, r#"{ "reviews": { "reviews": [] } }"#).unwrap();

    cmd()
        .arg("check")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("reviews.reviews"));
}

#[test]
fn rotate_renders_enabled_testimonials() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("site.toml");
    let output = dir.path().join("out.html");
    fs::write(&config, "[testimonials]\nenabled = true\n").unwrap();

    cmd()
        .args(["rotate", "-s", "testimonials", "-c"])
        .arg(&config)
        .arg("prev")
        .arg("-r")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("active 3 of 4: David Thompson"))
        .stdout(contains("○○○●"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("id=\"testimonials\""));
    assert!(html.contains(r#"data-rotator-item="3" style="order: 0">"#));
    assert!(html.contains(r#"data-rotator-item="2" style="order: 3" hidden"#));
}
